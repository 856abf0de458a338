use std::io;

/// Errors produced while building, reading or writing graphs.
///
/// A colouring conflict is not an error; see [`crate::colouring::Outcome`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A vertex count was negative or too large to represent.
    #[error("Invalid vertex count: {value}")]
    InvalidSize { value: String },
    /// A vertex index was outside `0..count`.
    #[error("Vertex index {index} out of range for a graph with {count} vertices")]
    Index { index: i64, count: usize },
    /// A malformed line in a graph list.  `line` is 1-based.
    #[error("Line {line}: {message}")]
    Format { line: usize, message: String },
    /// IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn index(index: impl TryInto<i64>, count: usize) -> Self {
        GraphError::Index {
            index: index.try_into().unwrap_or(i64::MAX),
            count,
        }
    }

    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        GraphError::Format {
            line,
            message: message.into(),
        }
    }
}
