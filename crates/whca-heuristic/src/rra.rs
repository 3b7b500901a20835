//! Reverse Resumable A* (RRA*): a lazy backward search rooted at an agent's
//! goal, queried with candidate cells from the forward space-time search.
//!
//! The backward search is plain Dijkstra from `goal` (uniform edge cost 1);
//! the Manhattan distance to the currently queried cell is used only to bias
//! pop order towards the region of interest, not to modify `g_score`. This
//! keeps `g_score[c]`, once closed, an exact shortest-path distance — the
//! heuristic may be re-aimed at a different query between resumptions
//! without invalidating anything already closed.

use std::collections::{HashMap, HashSet};

use whca_core::{Cell, Environment, OpenSet};

/// Sentinel returned by [`RraOracle::query`] when `goal` is unreachable from
/// the queried cell on the static grid.
pub const UNREACHABLE: i64 = i64::MAX;

/// A resumable backward search providing `h(c) = true distance from c to
/// goal`, expanding lazily as queries demand.
pub struct RraOracle {
    goal: Cell,
    open: OpenSet<Cell>,
    g_score: HashMap<Cell, i64>,
    closed: HashSet<Cell>,
}

impl RraOracle {
    /// Root a new backward search at `goal`.
    pub fn new(goal: Cell) -> Self {
        let mut open = OpenSet::new();
        let mut g_score = HashMap::new();
        g_score.insert(goal, 0);
        open.add(goal, 0);
        RraOracle { goal, open, g_score, closed: HashSet::new() }
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Exact shortest-path distance from `q` to `goal`, or [`UNREACHABLE`].
    ///
    /// Resumes the backward search from wherever it left off, expanding only
    /// as many nodes as necessary to close `q` (or to exhaust the grid).
    pub fn query(&mut self, env: &Environment, q: Cell) -> i64 {
        if self.closed.contains(&q) {
            return self.g_score[&q];
        }

        while let Some((node, _f)) = self.open.pop() {
            self.closed.insert(node);
            let g = self.g_score[&node];

            if node == q {
                return g;
            }

            for nb in env.free_neighbors(node) {
                if self.closed.contains(&nb) {
                    continue;
                }
                let tentative = g + 1;
                let is_better = match self.g_score.get(&nb) {
                    None => true,
                    Some(&current) => tentative < current,
                };
                if is_better {
                    self.g_score.insert(nb, tentative);
                    let f = tentative + nb.manhattan_distance(q);
                    self.open.upsert(nb, f);
                }
            }
        }

        UNREACHABLE
    }
}
