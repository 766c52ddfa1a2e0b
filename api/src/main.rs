use std::sync::Arc;

use admin_api::{config::AdminApiConfig, server};
use admin_db::storage::{memory::MemoryStorage, mongodb::MongoStorage};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = AdminApiConfig::parse();

    if config.dump_openapi {
        // The schema dump must work without a reachable database.
        let (_, api) = server::make(config, Arc::new(MemoryStorage::new())).await;
        let json = api.to_pretty_json().unwrap();
        print!("{}", json);
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or("admin_api=info,admin_common=info,admin_db=info".into()),
        )
        .pretty()
        .init();

    let db = MongoStorage::new(&config.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let (router, _) = server::make(config.clone(), Arc::new(db)).await;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind to address");

    info!("Listening on http://{:?}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
