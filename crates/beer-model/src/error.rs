use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    InvalidSortDirection(String),
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

pub type Result<T> = std::result::Result<T, ModelError>;
