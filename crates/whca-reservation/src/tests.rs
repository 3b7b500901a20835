//! Unit tests for whca-reservation.

use whca_core::{AgentId, Cell, TimedCell};

use crate::{ReservationError, ReservationTable};

fn tc(x: i32, y: i32, t: i64) -> TimedCell {
    TimedCell::new(x, y, t)
}

#[cfg(test)]
mod slots {
    use super::*;

    #[test]
    fn reserve_cell_is_idempotent_for_same_owner() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        rt.reserve_cell(Cell::new(1, 1), 5, a).unwrap();
        rt.reserve_cell(Cell::new(1, 1), 5, a).unwrap();
        assert!(rt.is_cell_occupied(Cell::new(1, 1), 5, None));
        assert!(!rt.is_cell_occupied(Cell::new(1, 1), 5, Some(a)));
    }

    #[test]
    fn reserve_cell_rejects_foreign_double_ownership() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        let b = AgentId(1);
        rt.reserve_cell(Cell::new(1, 1), 5, a).unwrap();
        let err = rt.reserve_cell(Cell::new(1, 1), 5, b).unwrap_err();
        assert!(matches!(err, ReservationError::DoubleOwned { owner, requester, .. } if owner == a && requester == b));
    }

    #[test]
    fn reserve_edge_blocks_a_head_on_swap() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        let b = AgentId(1);
        rt.reserve_edge(Cell::new(0, 0), Cell::new(1, 0), 3, a).unwrap();
        assert!(rt.is_edge_occupied(Cell::new(0, 0), Cell::new(1, 0), 3));
        assert!(rt.is_edge_occupied(Cell::new(1, 0), Cell::new(0, 0), 3));
        let err = rt.reserve_edge(Cell::new(1, 0), Cell::new(0, 0), 3, b).unwrap_err();
        assert!(matches!(err, ReservationError::DoubleOwned { .. }));
    }
}

#[cfg(test)]
mod commit {
    use super::*;

    #[test]
    fn commits_a_simple_moving_path() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        let window = vec![tc(0, 0, 0), tc(1, 0, 1), tc(2, 0, 2)];
        rt.commit_window(a, &window).unwrap();

        assert!(rt.is_cell_occupied(Cell::new(0, 0), 0, None));
        assert!(rt.is_cell_occupied(Cell::new(1, 0), 1, None));
        assert!(rt.is_cell_occupied(Cell::new(2, 0), 2, None));
        assert!(rt.is_edge_occupied(Cell::new(0, 0), Cell::new(1, 0), 1));
        assert!(rt.is_edge_occupied(Cell::new(1, 0), Cell::new(2, 0), 2));
        assert_eq!(rt.path_of(a), window.as_slice());
    }

    #[test]
    fn commits_wait_ticks_without_an_edge_reservation() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        // Agent waits at (0,0) from t=0 through t=3, then moves.
        let window = vec![tc(0, 0, 0), tc(0, 0, 3), tc(1, 0, 4)];
        rt.commit_window(a, &window).unwrap();

        for t in 0..=3 {
            assert!(rt.is_cell_occupied(Cell::new(0, 0), t, None), "missing wait tick {t}");
        }
        assert!(!rt.is_edge_occupied(Cell::new(0, 0), Cell::new(0, 0), 3));
        assert!(rt.is_edge_occupied(Cell::new(0, 0), Cell::new(1, 0), 4));
    }

    #[test]
    fn second_window_drops_duplicate_seam() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        rt.commit_window(a, &[tc(0, 0, 0), tc(1, 0, 1)]).unwrap();
        rt.commit_window(a, &[tc(1, 0, 1), tc(2, 0, 2)]).unwrap();

        assert_eq!(rt.path_of(a), &[tc(0, 0, 0), tc(1, 0, 1), tc(2, 0, 2)]);
    }

    #[test]
    fn a_later_agent_cannot_reserve_an_already_committed_cell() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        let b = AgentId(1);
        rt.commit_window(a, &[tc(0, 0, 0), tc(1, 0, 1)]).unwrap();
        let err = rt.commit_window(b, &[tc(5, 5, 0), tc(1, 0, 1)]).unwrap_err();
        assert!(matches!(err, ReservationError::DoubleOwned { .. }));
    }
}

#[cfg(test)]
mod cleanup {
    use super::*;

    #[test]
    fn drops_slots_and_path_entries_before_the_cutoff() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        rt.commit_window(a, &[tc(0, 0, 0), tc(1, 0, 1), tc(2, 0, 2)]).unwrap();

        rt.cleanup(2);

        assert!(!rt.is_cell_occupied(Cell::new(0, 0), 0, None));
        assert!(!rt.is_cell_occupied(Cell::new(1, 0), 1, None));
        assert!(rt.is_cell_occupied(Cell::new(2, 0), 2, None));
        assert_eq!(rt.path_of(a), &[tc(2, 0, 2)]);
    }

    #[test]
    fn is_idempotent() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        rt.commit_window(a, &[tc(0, 0, 0), tc(1, 0, 1)]).unwrap();
        rt.cleanup(1);
        let before = rt.path_of(a).to_vec();
        rt.cleanup(1);
        assert_eq!(rt.path_of(a), before.as_slice());
    }
}

#[cfg(test)]
mod blocked_node {
    use super::*;

    #[test]
    fn errors_when_the_slot_has_no_owner() {
        let mut rt = ReservationTable::new();
        let requester = AgentId(0);
        let err = rt.cleanup_blocked_node(Cell::new(3, 3), 9, requester).unwrap_err();
        assert!(matches!(err, ReservationError::NoOwner { .. }));
    }

    #[test]
    fn errors_when_the_requester_is_the_owner() {
        let mut rt = ReservationTable::new();
        let a = AgentId(0);
        rt.reserve_cell(Cell::new(3, 3), 9, a).unwrap();
        let err = rt.cleanup_blocked_node(Cell::new(3, 3), 9, a).unwrap_err();
        assert!(matches!(err, ReservationError::RequesterIsOwner { .. }));
    }

    #[test]
    fn retracts_the_blocking_suffix_and_reports_the_earliest_time() {
        let mut rt = ReservationTable::new();
        let owner = AgentId(0);
        let requester = AgentId(1);
        rt.commit_window(owner, &[tc(0, 0, 0), tc(1, 0, 1), tc(2, 0, 2), tc(3, 0, 3)]).unwrap();

        let (evicted, earliest) = rt.cleanup_blocked_node(Cell::new(2, 0), 2, requester).unwrap();
        assert_eq!(evicted, owner);
        assert_eq!(earliest, 2);

        // The retained prefix stops before the blocked cell.
        assert_eq!(rt.path_of(owner), &[tc(0, 0, 0), tc(1, 0, 1)]);
        // Its own reservations are gone...
        assert!(!rt.is_cell_occupied(Cell::new(2, 0), 2, None));
        assert!(!rt.is_cell_occupied(Cell::new(3, 0), 3, None));
        assert!(!rt.is_edge_occupied(Cell::new(2, 0), Cell::new(3, 0), 3));
        // ...but the retained prefix is untouched.
        assert!(rt.is_cell_occupied(Cell::new(0, 0), 0, None));
        assert!(rt.is_cell_occupied(Cell::new(1, 0), 1, None));
        assert!(rt.is_edge_occupied(Cell::new(0, 0), Cell::new(1, 0), 1));

        // The requester can now take that slot.
        rt.reserve_cell(Cell::new(2, 0), 2, requester).unwrap();
    }

    #[test]
    fn retracts_a_mid_wait_occupancy() {
        let mut rt = ReservationTable::new();
        let owner = AgentId(0);
        let requester = AgentId(1);
        // Owner waits at (1,0) from t=1 through t=4, then moves on.
        rt.commit_window(owner, &[tc(0, 0, 0), tc(1, 0, 1), tc(1, 0, 4), tc(2, 0, 5)]).unwrap();

        // Block the wait cell at a tick strictly inside the wait range.
        let (evicted, earliest) = rt.cleanup_blocked_node(Cell::new(1, 0), 2, requester).unwrap();
        assert_eq!(evicted, owner);
        assert_eq!(earliest, 2);

        assert_eq!(rt.path_of(owner), &[tc(0, 0, 0), tc(1, 0, 1)]);
        assert!(rt.is_cell_occupied(Cell::new(0, 0), 0, None));
        assert!(rt.is_cell_occupied(Cell::new(1, 0), 1, None));
        assert!(!rt.is_cell_occupied(Cell::new(1, 0), 2, None));
        assert!(!rt.is_cell_occupied(Cell::new(2, 0), 5, None));
    }
}
