use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
