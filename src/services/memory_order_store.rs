//! In-memory [`OrderStore`] for tests and local runs without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::StoreError, models::Order};

use super::order_store::{OrderRow, OrderStore};

/// Keeps rows in a map keyed by id. Ids start at 1, are never reused, and
/// always land above any id a caller saved explicitly.
pub struct InMemoryOrderStore {
    rows: RwLock<BTreeMap<i64, OrderRow>>,
    next_id: AtomicI64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: &mut Order) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;

        let id = match order.id() {
            Some(id) => {
                // keep generated ids clear of caller-assigned ones
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                order.set_id(Some(id));
                id
            }
        };

        rows.insert(id, OrderRow::new(id, order));
        tracing::debug!(id, "saved order in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned().map(Order::from))
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().map(Order::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let removed = self.rows.write().await.remove(&id).is_some();
        tracing::debug!(id, removed, "deleted order in memory");
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.rows.read().await.len() as u64)
    }
}
