use thiserror::Error;

#[derive(Error, Debug)]
pub enum EurobotError {
    /// Transport failure while delivering a reply.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, EurobotError>;
