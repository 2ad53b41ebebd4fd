#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("input closed before answering: {question}")]
    InputClosed { question: String },
    #[error("follow-up window must be at least one day, got {0}")]
    InvalidFollowupDays(u32),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
