pub mod db_init;
pub mod order_store;

pub mod memory_order_store;
pub mod mongo_order_store;

pub use memory_order_store::InMemoryOrderStore;
pub use mongo_order_store::MongoOrderStore;
pub use order_store::{OrderRow, OrderStore};
