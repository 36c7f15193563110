use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dictionary database not found: {0}")]
    DatabaseNotFound(std::path::PathBuf),

    #[error("database already exists: {0}")]
    AlreadyExists(std::path::PathBuf),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store connection lock poisoned")]
    Poisoned,
}
