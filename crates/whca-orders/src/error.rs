use thiserror::Error;

use whca_core::AgentId;

#[derive(Debug, Error)]
pub enum OrdersError {
    #[error("agent {0} has no currently assigned order")]
    NoAssignedOrder(AgentId),

    #[error("order parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OrdersResult<T> = Result<T, OrdersError>;
