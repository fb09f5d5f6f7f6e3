use thiserror::Error;

#[derive(Error, Debug)]
pub enum TankError {
    #[error("Invalid volume: {0} (must be finite and positive)")]
    InvalidVolume(f64),

    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TankError>;
