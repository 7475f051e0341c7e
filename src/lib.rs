pub mod app;
pub mod config;
pub mod db;
pub mod error;

pub use app::{App, RunReport};
pub use config::Config;
pub use db::DbClient;
pub use error::TodoError;
