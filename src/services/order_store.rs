use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{error::StoreError, models::Order};

pub const ORDERS_COLLECTION: &str = "orders";

/// Persistence seam for [`Order`] records.
///
/// Implementations assign the identifier on first save and never change it
/// afterwards.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts a new order (assigning its id) or replaces the stored row
    /// with the same id.
    async fn save(&self, order: &mut Order) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError>;

    /// All stored orders, lowest id first.
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Stored shape of an order in the `orders` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    #[serde(rename = "_id")]
    pub id: i64,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub pay_status: Option<String>,
}

impl OrderRow {
    /// Builds the row for an order whose id has been settled.
    pub fn new(id: i64, order: &Order) -> Self {
        Self {
            id,
            username: order.username().map(str::to_string),
            pay_status: order.pay_status().map(str::to_string),
        }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        let mut order = Order::new();
        order.set_id(Some(row.id));
        order.set_username(row.username);
        order.set_pay_status(row.pay_status);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    #[test]
    fn row_serializes_with_storage_field_names() {
        let mut order = Order::new();
        order.set_username(Some("alice".to_string()));
        order.set_pay_status(Some("PENDING".to_string()));

        let row = OrderRow::new(3, &order);
        let document = bson::to_document(&row).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 3);
        assert_eq!(document.get_str("username").unwrap(), "alice");
        assert_eq!(document.get_str("pay_status").unwrap(), "PENDING");
    }

    #[test]
    fn unset_text_fields_are_stored_as_null() {
        let row = OrderRow::new(1, &Order::new());
        let document = bson::to_document(&row).unwrap();

        assert_eq!(document.get("username"), Some(&Bson::Null));
        assert_eq!(document.get("pay_status"), Some(&Bson::Null));
    }

    #[test]
    fn row_missing_text_fields_loads_as_unset() {
        let row: OrderRow = bson::from_document(doc! { "_id": 9_i64 }).unwrap();
        let order = Order::from(row);

        assert_eq!(order.id(), Some(9));
        assert_eq!(order.username(), None);
        assert_eq!(order.pay_status(), None);
    }

    #[test]
    fn order_rebuilt_from_row_matches_original() {
        let mut order = Order::new();
        order.set_id(Some(4));
        order.set_username(Some("dave".to_string()));

        let rebuilt = Order::from(OrderRow::new(4, &order));
        assert_eq!(rebuilt, order);
    }
}
