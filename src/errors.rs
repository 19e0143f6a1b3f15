use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggBenchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("column {column} is not {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },
    #[error("column {column} has {actual} rows, dataset has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("repetitions must be at least 1")]
    NoRepetitions,
    #[error("average time of {0} is zero, speedup is undefined")]
    ZeroDuration(String),
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AggBenchError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        AggBenchError::InvalidInput(msg.into())
    }

    pub fn missing_column<T: Into<String>>(name: T) -> Self {
        AggBenchError::MissingColumn(name.into())
    }

    pub fn type_mismatch<T: Into<String>>(column: T, expected: &'static str) -> Self {
        AggBenchError::TypeMismatch {
            column: column.into(),
            expected,
        }
    }
}
