use thiserror::Error;

use whca_reservation::ReservationError;

/// Errors surfaced by a single agent's search step. A genuinely unreachable
/// goal is not an error — it is the [`crate::WindowResult::Unreachable`]
/// value — these variants only wrap reservation-table misuse, which should
/// never happen if the coordinator drives `SearchState` correctly.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("reservation table rejected a commit: {0}")]
    Reservation(#[from] ReservationError),
}

pub type SearchResult<T> = Result<T, SearchError>;
