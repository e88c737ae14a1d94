use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum MonitorError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("sample source failed: {0}")]
    SampleSource(String),

    #[error("notification sink failed: {0}")]
    NotificationSink(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
