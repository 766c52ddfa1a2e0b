use admin_db::storage::UserStore;
use anyhow::bail;

pub async fn delete_user(stg: &impl UserStore, id: i32) -> anyhow::Result<()> {
    if !UserStore::delete_by_id(stg, id).await? {
        bail!("no user with id {id}");
    }

    println!("Deleted user with ID {}", id);

    Ok(())
}
