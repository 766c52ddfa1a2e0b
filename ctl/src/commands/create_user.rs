use admin_db::{models::DbUser, storage::UserStore};
use anyhow::Context;
use clap::Parser;

#[derive(Clone, Parser)]
pub struct CreateUserParams {
    #[clap(short, long)]
    pub first_name: String,

    #[clap(short, long)]
    pub last_name: String,

    #[clap(short, long)]
    pub email: String,
}

pub async fn create_user(
    stg: &impl UserStore,
    CreateUserParams {
        first_name,
        last_name,
        email,
    }: CreateUserParams,
) -> anyhow::Result<()> {
    let new_user = UserStore::save(
        stg,
        DbUser {
            id: None,
            first_name,
            last_name,
            email,
        },
    )
    .await?;

    let id = new_user.id.context("store did not assign an id")?;
    println!("Created user with ID {}", id);

    Ok(())
}
