use mongodb::Client;

use ordertrack::{
    config,
    services::{db_init, MongoOrderStore, OrderStore},
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    if let Err(e) = db_init::ensure_sequences(&db).await {
        tracing::error!("failed to prepare id sequences: {e}");
        std::process::exit(1);
    }

    let store = MongoOrderStore::new(&db);
    match store.count().await {
        Ok(n) => tracing::info!(db = %settings.mongodb_db, orders = n, "order store ready"),
        Err(e) => {
            tracing::error!("failed to count orders: {e}");
            std::process::exit(1);
        }
    }
}
