use crate::db::models::Todo;
use crate::error::TodoError;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc};
use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use tracing::debug;

/// Operations the application runs against the `todo` collection.
pub trait TodoStore {
    /// Insert one document and return its generated `_id`.
    fn insert_one(&self, todo: &Todo) -> impl Future<Output = Result<Bson, TodoError>> + Send;

    /// Insert a batch in one write. Ids come back in input order.
    fn insert_many(
        &self,
        todos: &[Todo],
    ) -> impl Future<Output = Result<Vec<Bson>, TodoError>> + Send;

    /// Unfiltered query, fully materialized in the server's natural order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Document>, TodoError>> + Send;
}

/// Something that can be connected and then hands out a store. The
/// confirmation line goes to `out`.
pub trait Connector {
    type Store: TodoStore;

    fn connect<W: Write + Send>(
        &mut self,
        out: &mut W,
    ) -> impl Future<Output = Result<Self::Store, TodoError>> + Send;
}

#[derive(Clone)]
pub struct MongoTodoStore {
    collection: Collection<Todo>,
}

impl MongoTodoStore {
    pub fn new(collection: Collection<Todo>) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Todo> {
        &self.collection
    }
}

impl TodoStore for MongoTodoStore {
    async fn insert_one(&self, todo: &Todo) -> Result<Bson, TodoError> {
        let result = self
            .collection
            .insert_one(todo)
            .await
            .map_err(TodoError::Insert)?;
        debug!(
            collection = %self.collection.name(),
            id = %result.inserted_id,
            "inserted todo"
        );
        Ok(result.inserted_id)
    }

    async fn insert_many(&self, todos: &[Todo]) -> Result<Vec<Bson>, TodoError> {
        // the driver rejects empty batches
        if todos.is_empty() {
            return Ok(Vec::new());
        }
        let result = self
            .collection
            .insert_many(todos)
            .await
            .map_err(TodoError::Insert)?;
        let ids = ordered_ids(result.inserted_ids);
        debug!(
            collection = %self.collection.name(),
            count = ids.len(),
            "inserted todo batch"
        );
        Ok(ids)
    }

    async fn find_all(&self) -> Result<Vec<Document>, TodoError> {
        let cursor = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .await
            .map_err(TodoError::Query)?;
        let docs: Vec<Document> = cursor.try_collect().await.map_err(TodoError::Query)?;
        debug!(
            collection = %self.collection.name(),
            count = docs.len(),
            "fetched todos"
        );
        Ok(docs)
    }
}

/// The driver reports batch ids keyed by input position.
pub(crate) fn ordered_ids(inserted: HashMap<usize, Bson>) -> Vec<Bson> {
    let mut ids: Vec<(usize, Bson)> = inserted.into_iter().collect();
    ids.sort_by_key(|(idx, _)| *idx);
    ids.into_iter().map(|(_, id)| id).collect()
}
