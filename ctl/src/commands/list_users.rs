use admin_db::storage::UserStore;

pub async fn list_users(stg: &impl UserStore) -> anyhow::Result<()> {
    let users = UserStore::find_all(stg).await?;

    for user in &users {
        println!("{}", user);
    }
    println!("{} user(s)", users.len());

    Ok(())
}
