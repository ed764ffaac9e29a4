use thiserror::Error;

/// Errors returned by the aggregation engine and its readers/writers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point handed to the engine has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },

    /// An input record could not be turned into a point.
    #[error("malformed record {record}: {message}")]
    MalformedRecord {
        /// 0-based index of the record (line) in the source.
        record: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// Reading the source or writing the destination failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader or writer rejected the data.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
