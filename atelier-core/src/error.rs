use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The only domain error the catalog produces. Callers surface it as a
    /// user-visible not-found page, never as a system fault.
    #[error("collection not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
