use thiserror::Error;

/// Application error types.
///
/// All data-path variants are recoverable by the next refresh cycle; none
/// aborts the process.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The data source returned nothing usable (empty result, missing field).
    #[error("no data: {0}")]
    DataUnavailable(String),

    /// The fetch itself failed (connection, status, malformed payload).
    #[error("fetch failed: {0}")]
    TransportFault(String),

    /// Fewer clean points than the indicator windows require.
    #[error("need {required} points (have {available})")]
    InsufficientHistory { required: usize, available: usize },

    /// Every aligned indicator row was undefined.
    #[error("no usable rows after indicator alignment")]
    NoUsableData,

    /// An indicator value exists but is not a number.
    #[error("indicator value is not a number")]
    NotANumber,

    /// Invalid startup configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MonitorError {
    /// Short label rendered in place of a value, never a stale number.
    pub fn render_label(&self) -> String {
        match self {
            MonitorError::DataUnavailable(_) => "NO DATA".to_string(),
            MonitorError::TransportFault(_) => "FETCH ERR".to_string(),
            MonitorError::InsufficientHistory {
                required,
                available,
            } => format!("Need {} (Have {})", required, available),
            MonitorError::NoUsableData => "NO ROWS".to_string(),
            MonitorError::NotANumber => "NAN".to_string(),
            MonitorError::Config(_) => "CONFIG ERR".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
