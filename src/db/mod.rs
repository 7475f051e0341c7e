//! Database module: the MongoDB connection wrapper and the `todo` collection.
//!
//! Layout:
//! - `models.rs`: the `Todo` document and the fixed seed documents
//! - `client.rs`: `DbClient`, which owns the connection handle
//! - `store.rs`: `Connector`/`TodoStore` seams and their MongoDB implementation

pub mod client;
pub mod models;
pub mod store;

pub use client::{CONNECTED_MESSAGE, DbClient};
pub use models::Todo;
pub use store::{Connector, MongoTodoStore, TodoStore};
