//! Windowed space-time A*: the per-agent search the coordinator resumes one
//! window at a time.

use std::collections::HashMap;

use whca_core::{AgentId, Cell, Environment, OpenSet, Time, TimedCell, WhcaConfig};
use whca_heuristic::RraOracle;
use whca_reservation::ReservationTable;

use crate::error::SearchResult;

/// The outcome of one [`SearchState::step_window`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowResult {
    /// A window's worth of path was found, committed to the reservation
    /// table, and is ready for the coordinator to append and (eventually)
    /// emit.
    Committed(Vec<TimedCell>),
    /// The search is stuck behind another agent's committed path; that
    /// agent's future was evicted from the reservation table so this search
    /// (and the evicted agent's own search, once rebuilt) can proceed.
    Blocked { evicted: AgentId },
    /// No path exists to the goal at all — every candidate was exhausted
    /// with no foreign occupier to blame.
    Unreachable,
}

/// A windowed space-time A* search, frozen at a window boundary between
/// calls to [`SearchState::step_window`].
pub struct SearchState {
    agent: AgentId,
    goal: Cell,
    rra: RraOracle,
    open: OpenSet<TimedCell>,
    g_score: HashMap<Cell, Time>,
    came_from: HashMap<TimedCell, TimedCell>,
    origin_t: Time,
    window_start: TimedCell,
}

impl SearchState {
    /// Starts a fresh search for `agent`, beginning at `start` and aimed at
    /// `goal`.
    pub fn new(env: &Environment, agent: AgentId, start: TimedCell, goal: Cell) -> Self {
        let mut rra = RraOracle::new(goal);
        let h0 = rra.query(env, start.to_cell());

        let mut g_score = HashMap::new();
        g_score.insert(start.to_cell(), 0);

        let mut open = OpenSet::new();
        open.add(start, h0);

        SearchState {
            agent,
            goal,
            rra,
            open,
            g_score,
            came_from: HashMap::new(),
            origin_t: start.t,
            window_start: start,
        }
    }

    pub fn agent(&self) -> AgentId {
        self.agent
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Advances the search until either a window boundary is committed, a
    /// blocking agent is evicted, or the goal is proven unreachable.
    pub fn step_window(
        &mut self,
        env: &Environment,
        table: &mut ReservationTable,
        cfg: &WhcaConfig,
    ) -> SearchResult<WindowResult> {
        loop {
            let Some((node, _f)) = self.open.pop() else {
                // Nothing left to expand at all: no blocking information to
                // act on, so there is truly no path.
                return Ok(WindowResult::Unreachable);
            };

            let node_g = node.t - self.origin_t;
            if self.g_score.get(&node.to_cell()) != Some(&node_g) {
                continue; // superseded by a cheaper arrival found later
            }

            if node.t % cfg.time_window == 0 && node != self.window_start {
                let path = self.reconstruct(node);
                table.commit_window(self.agent, &path)?;
                let h = self.rra.query(env, node.to_cell());
                self.open = OpenSet::new();
                self.open.add(node, node_g + h);
                self.window_start = node;
                return Ok(WindowResult::Committed(path));
            }

            if node.to_cell() == self.goal {
                let padded = self.pad_goal(env, table, node, cfg.time_window);
                if padded != node {
                    let h = self.rra.query(env, padded.to_cell());
                    let g = padded.t - self.origin_t;
                    self.open.add(padded, g + h);
                    continue;
                }
            }

            if let Some(evicted) = self.expand(env, table, node, node_g)? {
                return Ok(WindowResult::Blocked { evicted });
            }
        }
    }

    /// Expands `node`'s successors. Returns `Some(evicted)` if the search
    /// had to break a deadlock to make progress.
    fn expand(
        &mut self,
        env: &Environment,
        table: &mut ReservationTable,
        node: TimedCell,
        node_g: Time,
    ) -> SearchResult<Option<AgentId>> {
        let current = node.to_cell();
        let mut min_abandon: Option<Time> = None;

        for nb in env.free_neighbors(current).chain(std::iter::once(current)) {
            match Self::earliest_free_time(table, self.agent, node, nb) {
                Ok(t_prime) => {
                    let tentative_g = t_prime - self.origin_t;
                    let better = self.g_score.get(&nb).is_none_or(|&g| tentative_g < g);
                    if better {
                        self.g_score.insert(nb, tentative_g);
                        let h = self.rra.query(env, nb);
                        let succ = TimedCell::from_cell(nb, t_prime);
                        self.open.upsert(succ, tentative_g + h);
                        self.came_from.insert(succ, node);
                    }
                }
                Err(t_blocked) => {
                    min_abandon = Some(min_abandon.map_or(t_blocked, |m| m.min(t_blocked)));
                }
            }
        }

        if !self.open.is_empty() {
            return Ok(None);
        }

        // Blocking detection: open is empty after exhausting every
        // candidate for this node.
        let Some(t_block) = min_abandon else {
            return Ok(None); // caller sees Unreachable on the next pop
        };
        if table.is_cell_occupied(current, t_block, Some(self.agent)) {
            let (evicted, _) = table.cleanup_blocked_node(current, t_block, self.agent)?;
            let h = self.rra.query(env, current);
            self.open.add(node, node_g + h);
            Ok(Some(evicted))
        } else {
            Ok(None)
        }
    }

    /// The earliest `t' >= current.t + 1` such that `nb` and the edge
    /// `current -> nb` are both free of foreign ownership. `current`'s own
    /// occupation is only re-checked once a wait is already known to be
    /// needed (i.e. on the tick *after* a candidate fails), not on the first
    /// candidate — the agent hasn't committed its own future occupancy of
    /// `current` yet, so another agent owning `current` at a later tick is
    /// not itself a reason to reject an otherwise-free first move. `Err(t)`
    /// reports the tick at which `current` was found foreign-owned while
    /// waiting, aborting the candidate.
    fn earliest_free_time(
        table: &ReservationTable,
        agent: AgentId,
        current: TimedCell,
        nb: Cell,
    ) -> Result<Time, Time> {
        let mut t = current.t + 1;
        loop {
            let nb_free = !table.is_cell_occupied(nb, t, Some(agent));
            let edge_free = !table.is_edge_occupied(current.to_cell(), nb, t);
            if nb_free && edge_free {
                return Ok(t);
            }
            if table.is_cell_occupied(current.to_cell(), t, Some(agent)) {
                return Err(t);
            }
            t += 1;
        }
    }

    /// Parks the agent at the goal for as long as the cell stays free and we
    /// have not yet reached a window boundary. Returns `node` unchanged if
    /// no padding step was possible.
    fn pad_goal(&mut self, _env: &Environment, table: &ReservationTable, node: TimedCell, w: Time) -> TimedCell {
        let mut t = node.t;
        loop {
            let candidate = t + 1;
            if table.is_cell_occupied(self.goal, candidate, Some(self.agent)) {
                break;
            }
            t = candidate;
            if t % w == 0 {
                break;
            }
        }
        if t == node.t {
            return node;
        }
        let padded = TimedCell::from_cell(self.goal, t);
        self.came_from.insert(padded, node);
        self.g_score.insert(self.goal, t - self.origin_t);
        padded
    }

    fn reconstruct(&self, end: TimedCell) -> Vec<TimedCell> {
        let mut path = vec![end];
        let mut cur = end;
        while cur != self.window_start {
            cur = self.came_from[&cur];
            path.push(cur);
        }
        path.reverse();
        path
    }
}
