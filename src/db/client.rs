use crate::config::{Config, DEFAULT_COLLECTION};
use crate::db::models::Todo;
use crate::db::store::{Connector, MongoTodoStore};
use crate::error::TodoError;
use mongodb::bson::doc;
use mongodb::error::Error as MongoError;
use mongodb::options::{ClientOptions, DriverInfo};
use mongodb::{Client, Database};
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Line printed to stdout once the database answers.
pub const CONNECTED_MESSAGE: &str = "Connected to db";

/// Owns the connection to one logical database. Starts unconnected; the first
/// successful `connect` stores the handle and every later call reuses it.
pub struct DbClient {
    url: String,
    database: String,
    collection: String,
    server_selection_timeout: Option<Duration>,
    db: Option<Database>,
}

impl DbClient {
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            collection: DEFAULT_COLLECTION.to_string(),
            server_selection_timeout: None,
            db: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            url: cfg.mongodb_url.clone(),
            database: cfg.database.clone(),
            collection: cfg.collection.clone(),
            server_selection_timeout: cfg.server_selection_timeout_ms.map(Duration::from_millis),
            db: None,
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    /// Connect and return the database handle, writing `CONNECTED_MESSAGE`
    /// to `out` on success. Errors from the driver are returned as-is;
    /// nothing is retried.
    pub async fn connect<W: Write>(&mut self, out: &mut W) -> Result<Database, TodoError> {
        if let Some(db) = &self.db {
            return Ok(db.clone());
        }

        let db = self.open().await.map_err(|source| TodoError::Connect {
            url: self.url.clone(),
            source,
        })?;

        info!(database = %db.name(), "connected to MongoDB");
        self.db = Some(db.clone());
        writeln!(out, "{CONNECTED_MESSAGE}")?;
        Ok(db)
    }

    async fn open(&self) -> Result<Database, MongoError> {
        let mut options = ClientOptions::parse(self.url.as_str()).await?;
        options.driver_info = Some(DriverInfo::builder().name(env!("CARGO_PKG_NAME")).build());
        if let Some(timeout) = self.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        let client = Client::with_options(options)?;
        let db = client.database(&self.database);

        // The driver connects lazily; ping so an unreachable server fails here.
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(db)
    }
}

impl Connector for DbClient {
    type Store = MongoTodoStore;

    async fn connect<W: Write + Send>(
        &mut self,
        out: &mut W,
    ) -> Result<MongoTodoStore, TodoError> {
        let db = DbClient::connect(self, out).await?;
        Ok(MongoTodoStore::new(db.collection::<Todo>(&self.collection)))
    }
}
