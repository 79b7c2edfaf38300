use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{
    bson::doc,
    options::{
        FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument, UpdateOptions,
    },
    Collection, Database,
};
use serde::Deserialize;

use crate::{error::StoreError, models::Order};

use super::{
    db_init::SEQUENCES_COLLECTION,
    order_store::{OrderRow, OrderStore, ORDERS_COLLECTION},
};

#[derive(Debug, Deserialize)]
struct Sequence {
    next_val: i64,
}

/// [`OrderStore`] backed by the `orders` collection, with ids drawn from the
/// `orders` document in the `sequences` collection. Saving an order with a
/// caller-set id advances the sequence past it.
#[derive(Clone)]
pub struct MongoOrderStore {
    orders: Collection<OrderRow>,
    sequences: Collection<Sequence>,
}

impl MongoOrderStore {
    pub fn new(db: &Database) -> Self {
        Self {
            orders: db.collection::<OrderRow>(ORDERS_COLLECTION),
            sequences: db.collection::<Sequence>(SEQUENCES_COLLECTION),
        }
    }

    async fn next_id(&self) -> Result<i64, StoreError> {
        let opts = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let seq = self
            .sequences
            .find_one_and_update(
                doc! { "_id": ORDERS_COLLECTION },
                doc! { "$inc": { "next_val": 1_i64 } },
                opts,
            )
            .await?
            .ok_or_else(|| StoreError::SequenceUnavailable(ORDERS_COLLECTION.to_string()))?;

        Ok(seq.next_val)
    }

    /// Moves the sequence to at least `id` so later generated ids skip it.
    async fn reserve_id(&self, id: i64) -> Result<(), StoreError> {
        self.sequences
            .update_one(
                doc! { "_id": ORDERS_COLLECTION },
                doc! { "$max": { "next_val": id } },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    async fn save(&self, order: &mut Order) -> Result<(), StoreError> {
        match order.id() {
            None => {
                let id = self.next_id().await?;
                self.orders.insert_one(OrderRow::new(id, order), None).await?;
                order.set_id(Some(id));
                tracing::debug!(id, "inserted order");
            }
            Some(id) => {
                self.reserve_id(id).await?;
                self.orders
                    .replace_one(
                        doc! { "_id": id },
                        OrderRow::new(id, order),
                        ReplaceOptions::builder().upsert(true).build(),
                    )
                    .await?;
                tracing::debug!(id, "updated order");
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        let row = self.orders.find_one(doc! { "_id": id }, None).await?;
        Ok(row.map(Order::from))
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let find_opts = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let mut cursor = self.orders.find(None, find_opts).await?;

        let mut out: Vec<Order> = vec![];
        while let Some(res) = cursor.next().await {
            out.push(res?.into());
        }
        Ok(out)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let res = self.orders.delete_one(doc! { "_id": id }, None).await?;
        tracing::debug!(id, deleted = res.deleted_count, "deleted order");
        Ok(res.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.orders.count_documents(None, None).await?)
    }
}
