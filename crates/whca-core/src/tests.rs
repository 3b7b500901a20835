//! Unit tests for whca-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, OrderId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(OrderId(100) > OrderId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(OrderId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_distance() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn neighbors_are_adjacent_and_distinct() {
        let c = Cell::new(2, 2);
        let nbs = c.neighbors();
        assert_eq!(nbs.len(), 4);
        for nb in nbs {
            assert!(c.is_adjacent(nb));
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn timed_cell_roundtrip() {
        let c = Cell::new(3, 4);
        let tc = c.at_time(10);
        assert_eq!(tc.to_cell(), c);
        assert_eq!(tc.t, 10);
    }
}

#[cfg(test)]
mod environment {
    use crate::{Agent, AgentId, Cell, CellState, Environment};

    #[test]
    fn empty_grid_is_all_free() {
        let env = Environment::empty(5, 5);
        for x in 0..5 {
            for y in 0..5 {
                assert!(env.is_free(Cell::new(x, y)));
            }
        }
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let env = Environment::empty(3, 3);
        assert!(!env.is_free(Cell::new(-1, 0)));
        assert!(!env.is_free(Cell::new(3, 0)));
        assert!(!env.is_free(Cell::new(0, 3)));
    }

    #[test]
    fn set_cell_state_blocks_it() {
        let mut env = Environment::empty(3, 3);
        let c = Cell::new(1, 1);
        env.set_cell_state(c, CellState::Blocked);
        assert!(!env.is_free(c));
        assert_eq!(env.free_neighbors(c).count(), 4);
    }

    #[test]
    fn free_neighbors_excludes_blocked_and_out_of_bounds() {
        let mut env = Environment::empty(3, 3);
        env.set_cell_state(Cell::new(1, 0), CellState::Blocked);
        let nbs: Vec<_> = env.free_neighbors(Cell::new(0, 0)).collect();
        // (0,0)'s neighbors: (1,0) blocked, (-1,0) oob, (0,1) free, (0,-1) oob
        assert_eq!(nbs, vec![Cell::new(0, 1)]);
    }

    #[test]
    fn agents_list_preserved() {
        let agents = vec![Agent::new(AgentId(0), Cell::new(0, 0))];
        let env = Environment::new(2, 2, vec![CellState::Free; 4], agents.clone());
        assert_eq!(env.agents, agents);
    }
}

#[cfg(test)]
mod open_set {
    use crate::OpenSet;

    #[test]
    fn add_then_pop_lowest_first() {
        let mut os = OpenSet::new();
        os.add(1, 10);
        os.add(2, 5);
        os.add(3, 7);
        assert_eq!(os.pop(), Some((2, 5)));
        assert_eq!(os.pop(), Some((3, 7)));
        assert_eq!(os.pop(), Some((1, 10)));
        assert_eq!(os.pop(), None);
    }

    #[test]
    fn add_is_noop_if_present() {
        let mut os = OpenSet::new();
        os.add(1, 10);
        os.add(1, 2); // ignored: node already indexed
        assert_eq!(os.f_score(1), Some(10));
    }

    #[test]
    fn upsert_lowers_score_and_skips_stale_entry() {
        let mut os = OpenSet::new();
        os.upsert(1, 10);
        os.upsert(1, 3); // strictly better: rebinds
        os.upsert(1, 20); // worse: ignored
        assert_eq!(os.f_score(1), Some(3));
        assert_eq!(os.pop(), Some((1, 3)));
        assert_eq!(os.pop(), None); // stale Reverse(Entry{10,1}) must be skipped
    }

    #[test]
    fn ties_break_on_node_order() {
        let mut os = OpenSet::new();
        os.add(5, 1);
        os.add(2, 1);
        os.add(9, 1);
        assert_eq!(os.pop(), Some((2, 1)));
        assert_eq!(os.pop(), Some((5, 1)));
        assert_eq!(os.pop(), Some((9, 1)));
    }

    #[test]
    fn contains_and_len() {
        let mut os = OpenSet::new();
        assert!(os.is_empty());
        os.add("a", 1);
        os.add("b", 2);
        assert_eq!(os.len(), 2);
        assert!(os.contains("a"));
        os.pop();
        assert_eq!(os.len(), 1);
    }
}

#[cfg(test)]
mod config {
    use crate::WhcaConfig;

    #[test]
    fn default_window_is_eight() {
        let cfg = WhcaConfig::default();
        assert_eq!(cfg.time_window, 8);
        assert_eq!(cfg.cleanup_threshold(), 32);
        assert_eq!(cfg.emission_threshold(), 16);
    }

    #[test]
    #[should_panic(expected = "time_window must be positive")]
    fn rejects_non_positive_window() {
        WhcaConfig::new(0);
    }
}
