//! The reservation table: the authoritative record of which (cell, time) and
//! (edge, time) slots are claimed by which agent.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;
#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use whca_core::{AgentId, Cell, Time, TimedCell};

use crate::{ReservationError, ReservationResult};

/// A single timed-occupancy slot: `from == to` means node occupancy at `t`;
/// `from != to` means the edge `from -> to` is in use during the tick ending
/// at `t`.
type Key = (Cell, Cell, Time);

/// The shared timed-occupancy store. Owned exclusively by the coordinator;
/// every search accesses it only while the coordinator has control (no
/// concurrency inside the core, see the crate-level docs).
#[derive(Default)]
pub struct ReservationTable {
    map: HashMap<Key, AgentId>,

    /// The committed future of each agent, as an ordered, non-decreasing
    /// sequence of `TimedCell`s. Consecutive waits across the same cell at
    /// consecutive ticks are skipped (see [`ReservationTable::commit_window`]),
    /// but nothing reads these arrays except by `AgentId`, so exposing the
    /// field directly (matching the rest of this corpus's SoA convention) is
    /// the simplest accurate API.
    pub agents_paths: HashMap<AgentId, Vec<TimedCell>>,
}

impl ReservationTable {
    pub fn new() -> Self {
        ReservationTable { map: HashMap::default(), agents_paths: HashMap::default() }
    }

    /// `true` iff `(c, c, t)` is owned; if `by` is given, only a *foreign*
    /// owner (one other than `by`) counts.
    pub fn is_cell_occupied(&self, c: Cell, t: Time, by: Option<AgentId>) -> bool {
        match self.map.get(&(c, c, t)) {
            None => false,
            Some(&owner) => by.is_none_or(|requester| owner != requester),
        }
    }

    /// `true` iff the edge `(a, b, t)` is owned by anyone.
    pub fn is_edge_occupied(&self, a: Cell, b: Cell, t: Time) -> bool {
        self.map.contains_key(&(a, b, t))
    }

    /// The owner of `(c, c, t)`, if any.
    pub fn cell_owner(&self, c: Cell, t: Time) -> Option<AgentId> {
        self.map.get(&(c, c, t)).copied()
    }

    /// Reserve `(c, c, t)` for `agent`. Idempotent if `agent` already owns
    /// the slot; a hard error if a different agent does (invariant 1).
    pub fn reserve_cell(&mut self, c: Cell, t: Time, agent: AgentId) -> ReservationResult<()> {
        self.reserve_slot(c, c, t, agent)
    }

    /// Reserve both orientations of the edge `a <-> b` at `t` for `agent`,
    /// forbidding a head-on swap with any agent crossing the other way.
    pub fn reserve_edge(&mut self, a: Cell, b: Cell, t: Time, agent: AgentId) -> ReservationResult<()> {
        self.reserve_slot(a, b, t, agent)?;
        self.reserve_slot(b, a, t, agent)?;
        Ok(())
    }

    fn reserve_slot(&mut self, from: Cell, to: Cell, t: Time, agent: AgentId) -> ReservationResult<()> {
        match self.map.get(&(from, to, t)) {
            Some(&owner) if owner == agent => Ok(()), // idempotent for the same owner
            Some(&owner) => Err(ReservationError::DoubleOwned { from, to, t, owner, requester: agent }),
            None => {
                self.map.insert((from, to, t), agent);
                Ok(())
            }
        }
    }

    /// Commit one window of a search's chosen path: for each consecutive
    /// pair `(prev, next)`, reserve the wait ticks at `prev`'s cell, the
    /// arrival node at `next`, and (if the cells differ) the edge between
    /// them. The window is then appended to `agents_paths[agent]`, dropping
    /// a duplicate leading entry if it repeats the path's current last entry
    /// (the window-seam case).
    ///
    /// `window` must be non-empty and sorted by strictly increasing `t`.
    pub fn commit_window(&mut self, agent: AgentId, window: &[TimedCell]) -> ReservationResult<()> {
        if window.is_empty() {
            return Ok(());
        }

        for pair in window.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            self.commit_pair(prev, next, agent)?;
        }
        // The very first entry of a window is its own "arrival" too (e.g. the
        // agent's spawn cell, or the tail of a previous window being resumed
        // from) — make sure it is reserved even when the window has exactly
        // one entry.
        let first = window[0];
        self.reserve_cell(first.to_cell(), first.t, agent)?;

        let path = self.agents_paths.entry(agent).or_default();
        for &tc in window {
            if path.last() == Some(&tc) {
                continue;
            }
            path.push(tc);
        }
        Ok(())
    }

    fn commit_pair(&mut self, prev: TimedCell, next: TimedCell, agent: AgentId) -> ReservationResult<()> {
        for tt in prev.t..next.t {
            self.reserve_cell(prev.to_cell(), tt, agent)?;
        }
        self.reserve_cell(next.to_cell(), next.t, agent)?;
        if prev.to_cell() != next.to_cell() {
            self.reserve_edge(prev.to_cell(), next.to_cell(), next.t, agent)?;
        }
        Ok(())
    }

    /// Removes all slots with `t < t_cutoff`, and trims every agent's path
    /// prefix older than `t_cutoff`. Idempotent.
    pub fn cleanup(&mut self, t_cutoff: Time) {
        self.map.retain(|key, _| key.2 >= t_cutoff);
        for path in self.agents_paths.values_mut() {
            path.retain(|tc| tc.t >= t_cutoff);
        }
    }

    /// The deadlock-breaker: evict `requester`'s blocker. `c` is the cell the
    /// requester cannot pass at time `t`. Every slot owned by the blocker at
    /// or after `t` is retracted — not just `(c, c, t)` itself, since the
    /// rest of its committed future assumed it would still be there. Returns
    /// the evicted owner and `t`, so the coordinator can rebuild that
    /// agent's search from its new (shorter) path tail.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot has no owner, or if the owner is the
    /// requester itself — both indicate a logic bug in the caller.
    pub fn cleanup_blocked_node(
        &mut self,
        c: Cell,
        t: Time,
        requester: AgentId,
    ) -> ReservationResult<(AgentId, Time)> {
        let owner = self
            .map
            .get(&(c, c, t))
            .copied()
            .ok_or(ReservationError::NoOwner { cell: c, t, requester })?;
        if owner == requester {
            return Err(ReservationError::RequesterIsOwner { cell: c, t, requester });
        }

        self.map.retain(|key, &mut o| !(o == owner && key.2 >= t));

        let path = self.agents_paths.entry(owner).or_default();
        let cut = path.iter().position(|tc| tc.t >= t).unwrap_or(path.len());
        path.truncate(cut);

        Ok((owner, t))
    }

    /// The committed future of `agent`, oldest first.
    pub fn path_of(&self, agent: AgentId) -> &[TimedCell] {
        self.agents_paths.get(&agent).map(Vec::as_slice).unwrap_or(&[])
    }
}
