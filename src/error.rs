use mongodb::error::Error as MongoError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: MongoError,
    },

    #[error("insert failed: {0}")]
    Insert(#[source] MongoError),

    #[error("query failed: {0}")]
    Query(#[source] MongoError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl TodoError {
    /// Short name of the step that failed, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TodoError::Connect { .. } => "connect",
            TodoError::Insert(_) => "insert",
            TodoError::Query(_) => "query",
            TodoError::Output(_) => "output",
        }
    }
}
