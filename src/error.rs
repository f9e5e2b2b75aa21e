use crate::*;

/// Errors surfaced while building a polygon from a coordinate source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw line was not two whitespace separated, finite numbers.
    #[error("could not parse coordinates: {0:?}")]
    MalformedCoordinates(String),

    /// The polygon rejected a side or could not close.
    #[error("error when adding new side: {0}")]
    Polygon(#[from] PolygonError),

    /// No usable input source was supplied.
    #[error("{0}")]
    MissingInput(String),

    /// The source ran dry before any side was given.
    #[error("input ended before any polygon side was given")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The persisted report history could not be decoded.
    #[error("report store is unreadable: {0}")]
    Store(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
