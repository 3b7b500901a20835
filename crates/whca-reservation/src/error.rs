use thiserror::Error;

use whca_core::{AgentId, Cell, Time};

/// Errors produced by the reservation table.
///
/// Every variant here indicates invariant 1 or its `cleanup_blocked_node`
/// preconditions were violated by the caller — these are logic bugs, not
/// recoverable runtime conditions, and must not be masked.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("slot ({from}, {to}, t={t}) is already owned by {owner}, cannot reserve for {requester}")]
    DoubleOwned { from: Cell, to: Cell, t: Time, owner: AgentId, requester: AgentId },

    #[error("cleanup_blocked_node({cell}, t={t}) called by {requester} but the slot has no owner")]
    NoOwner { cell: Cell, t: Time, requester: AgentId },

    #[error("cleanup_blocked_node({cell}, t={t}) called by {requester} but {requester} is the owner of the slot")]
    RequesterIsOwner { cell: Cell, t: Time, requester: AgentId },
}

pub type ReservationResult<T> = Result<T, ReservationError>;
