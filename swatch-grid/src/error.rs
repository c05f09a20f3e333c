use thiserror::Error;

/// Errors reported by palette grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no columns, or fewer colors than one full row.
    #[error("invalid grid layout: {columns} columns x {rows} rows")]
    InvalidLayout { columns: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
