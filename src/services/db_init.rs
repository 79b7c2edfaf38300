use mongodb::{
    bson::{doc, Document},
    options::UpdateOptions,
    Database,
};

use crate::error::StoreError;

use super::order_store::ORDERS_COLLECTION;

pub const SEQUENCES_COLLECTION: &str = "sequences";

/// Makes sure every id sequence document exists without resetting one that
/// has already issued values.
pub async fn ensure_sequences(db: &Database) -> Result<(), StoreError> {
    let col = db.collection::<Document>(SEQUENCES_COLLECTION);

    // orders: ids start at 1
    col.update_one(
        doc! { "_id": ORDERS_COLLECTION },
        doc! { "$setOnInsert": { "next_val": 0_i64 } },
        UpdateOptions::builder().upsert(true).build(),
    )
    .await?;

    tracing::info!(sequence = ORDERS_COLLECTION, "id sequence ready");
    Ok(())
}
