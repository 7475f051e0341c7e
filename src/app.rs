use crate::db::models::Todo;
use crate::db::store::{Connector, TodoStore};
use crate::error::TodoError;
use mongodb::bson::{Bson, Document};
use std::fmt::Display;
use std::io::Write;
use tracing::{info, warn};

pub const BANNER: &str = "Starting application...2 + 1";

/// The only line printed when any step fails.
pub const FAILURE_MESSAGE: &str = "Unable to connect to db";

/// Results of one complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub inserted_id: Bson,
    pub inserted_ids: Vec<Bson>,
    pub documents: Vec<Document>,
}

/// Drives the connect, insert, insert-many and find sequence, writing each
/// result as one line to `out`.
pub struct App<C, W> {
    connector: C,
    out: W,
}

impl<C, W> App<C, W>
where
    C: Connector,
    W: Write + Send,
{
    pub fn new(connector: C, out: W) -> Self {
        Self { connector, out }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn into_parts(self) -> (C, W) {
        (self.connector, self.out)
    }

    /// Print the banner, then run the sequence. Any failure is reduced to
    /// `FAILURE_MESSAGE` on the output and `None`; this never returns an error.
    pub async fn start(&mut self) -> Option<RunReport> {
        // a broken sink is reported again below by `run`
        let _ = writeln!(self.out, "{BANNER}");

        match self.run().await {
            Ok(report) => {
                info!(
                    inserted = 1 + report.inserted_ids.len(),
                    fetched = report.documents.len(),
                    "todo sequence finished"
                );
                Some(report)
            }
            Err(e) => {
                warn!(step = e.kind(), error = %e, "todo sequence aborted");
                let _ = writeln!(self.out, "{FAILURE_MESSAGE}");
                None
            }
        }
    }

    /// The sequence without the failure boundary; stops at the first error.
    pub async fn run(&mut self) -> Result<RunReport, TodoError> {
        let store = self.connector.connect(&mut self.out).await?;

        let inserted_id = store.insert_one(&Todo::seed_single()).await?;
        writeln!(self.out, "{inserted_id}")?;

        let inserted_ids = store.insert_many(&Todo::seed_batch()).await?;
        writeln!(self.out, "{}", render_list(&inserted_ids))?;

        let documents = store.find_all().await?;
        writeln!(self.out, "{}", render_list(&documents))?;

        Ok(RunReport {
            inserted_id,
            inserted_ids,
            documents,
        })
    }
}

fn render_list<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
