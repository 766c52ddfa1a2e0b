use admin_db::storage::mongodb::MongoStorage;
use clap::{Parser, Subcommand};

use crate::commands::CreateUserParams;

mod commands;

#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    #[clap(
        short = 'D',
        long,
        env = "ADMIN_API_MONGODB_URI",
        default_value = "mongodb://localhost:27017/admin_panel"
    )]
    db_url: String,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    #[command(name = "create-user")]
    CreateUser(CreateUserParams),

    #[command(name = "list-users")]
    ListUsers,

    #[command(name = "delete-user")]
    DeleteUser { id: i32 },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let stg = MongoStorage::new(&args.db_url)
        .await
        .expect("Failed to connect to MongoDB");

    match args.command {
        Command::CreateUser(params) => {
            commands::create_user(&stg, params)
                .await
                .expect("Failed to create user");
        }
        Command::ListUsers => {
            commands::list_users(&stg).await.expect("Failed to list users");
        }
        Command::DeleteUser { id } => {
            commands::delete_user(&stg, id)
                .await
                .expect("Failed to delete user");
        }
    }
}
