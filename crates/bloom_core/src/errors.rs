use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persist: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, BloomError>;
