use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructGraphError {
    #[error("{operation}: identifier {id} not found")]
    NotFound { operation: &'static str, id: i64 },
    #[error("{operation}: expected 0 to 2 node arguments, received {received}")]
    InvalidArguments {
        operation: &'static str,
        received: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StructGraphError {
    pub fn not_found(operation: &'static str, id: i64) -> Self {
        StructGraphError::NotFound { operation, id }
    }

    pub fn invalid_arguments(operation: &'static str, received: usize) -> Self {
        StructGraphError::InvalidArguments {
            operation,
            received,
        }
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        StructGraphError::InvalidInput(msg.into())
    }
}
