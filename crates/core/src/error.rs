use thiserror::Error;

pub type UpliftResult<T> = Result<T, UpliftError>;

#[derive(Error, Debug)]
pub enum UpliftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed record in {file}, line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
