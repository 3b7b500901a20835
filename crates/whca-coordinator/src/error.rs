use thiserror::Error;

use whca_core::AgentId;
use whca_orders::OrdersError;
use whca_reservation::ReservationError;
use whca_search::SearchError;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("agent {agent}'s goal is unreachable on the static grid")]
    UnreachableGoal { agent: AgentId },

    #[error("search failed for agent: {0}")]
    Search(#[from] SearchError),

    #[error("reservation table error: {0}")]
    Reservation(#[from] ReservationError),

    #[error("order tracker error: {0}")]
    Orders(#[from] OrdersError),
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
