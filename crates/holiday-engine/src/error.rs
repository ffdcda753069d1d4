//! Error types for feed encoding and persistence.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The emitter refused an event (e.g. a date it cannot write as an iCalendar DATE).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Creating the output directory or writing the feed file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FeedError>;
