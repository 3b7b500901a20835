//! The `Core` struct and its tick loop.

use std::collections::HashMap;

use whca_core::{AgentId, Cell, Environment, TimedCell, WhcaConfig};
use whca_orders::OrderTracker;
use whca_reservation::ReservationTable;
use whca_search::{SearchState, WindowResult};

use crate::error::{CoordinatorError, CoordinatorResult};
use crate::message::{environment_from_map, InMessage, OutMessage, PathStep};
use crate::observer::CoordinatorObserver;

/// The planning core: owns the grid, the reservation table, the order
/// tracker, and one [`SearchState`] per agent with a search currently in
/// flight.
///
/// Create via [`CoreBuilder`][crate::CoreBuilder]; drive with repeated calls
/// to [`Core::tick`] or, for tests and offline scenarios, [`Core::run_ticks`].
pub struct Core {
    env: Environment,
    cfg: WhcaConfig,
    table: ReservationTable,
    orders: OrderTracker,
    searches: HashMap<AgentId, SearchState>,
    /// Each agent's currently assigned goal (or its own position if parked).
    goals: HashMap<AgentId, Cell>,
    /// Committed-but-not-yet-emitted path, per agent.
    pending_paths: HashMap<AgentId, Vec<TimedCell>>,
    stopped: bool,
    tick_count: u64,
}

impl Core {
    pub fn new(env: Environment, cfg: WhcaConfig) -> Self {
        Core {
            env,
            cfg,
            table: ReservationTable::new(),
            orders: OrderTracker::new(),
            searches: HashMap::new(),
            goals: HashMap::new(),
            pending_paths: HashMap::new(),
            stopped: false,
            tick_count: 0,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The last committed timestep of `agent`'s reserved path, or `0` if it
    /// has none yet. Exposed for diagnostics and tests of the ahead-of-time
    /// fairness cap.
    pub fn agent_tail(&self, agent: AgentId) -> whca_core::Time {
        self.agent_tail_t(agent)
    }

    /// Advances the coordinator by one tick: ingest `inbound`, resume every
    /// eligible agent's search by one window, garbage-collect the
    /// reservation table, and emit any path/order-completion messages that
    /// have aged past their thresholds.
    pub fn tick<O: CoordinatorObserver>(
        &mut self,
        inbound: Vec<InMessage>,
        observer: &mut O,
    ) -> CoordinatorResult<Vec<OutMessage>> {
        let now = self.tick_count as whca_core::Time;
        observer.on_tick_start(now);
        self.tick_count += 1;

        // ── Step 1: ingest ─────────────────────────────────────────────────
        for msg in inbound {
            match msg {
                InMessage::Map { width_units, height_units, objects } => {
                    self.env = environment_from_map(width_units, height_units, &objects);
                }
                InMessage::Orders(orders) => self.orders.add_orders(orders),
                InMessage::GlobalStop => self.stopped = true,
            }
        }

        let mut out = Vec::new();
        if self.stopped {
            observer.on_tick_end(now);
            return Ok(out);
        }

        let agent_ids: Vec<AgentId> = self.env.agents.iter().map(|a| a.agent_id).collect();
        if agent_ids.is_empty() {
            observer.on_tick_end(now);
            return Ok(out);
        }

        // ── Step 2: ahead-of-time fairness set ─────────────────────────────
        let min_t = agent_ids.iter().map(|&a| self.agent_tail_t(a)).min().unwrap_or(0);

        // ── Step 3: round-robin over every eligible agent this tick ────────
        for &agent in &agent_ids {
            if self.agent_tail_t(agent) > min_t + self.cfg.time_window {
                continue; // fairness cap — this agent is racing ahead
            }
            self.step_agent(agent, observer)?;
        }

        // ── Step 5: reservation GC ──────────────────────────────────────────
        let min_t_after = agent_ids.iter().map(|&a| self.agent_tail_t(a)).min().unwrap_or(0);
        self.table.cleanup(min_t_after - self.cfg.cleanup_threshold());

        // ── Steps 6 & 8: emission pass, interleaved with order completion ──
        for &agent in &agent_ids {
            self.emit_prefix(agent, min_t_after, &mut out)?;
        }

        observer.on_tick_end(now);
        Ok(out)
    }

    /// Runs `n` ticks back to back with no inbound messages, collecting every
    /// tick's outbound batch. Useful for tests and offline scenarios.
    pub fn run_ticks<O: CoordinatorObserver>(
        &mut self,
        n: u64,
        observer: &mut O,
    ) -> CoordinatorResult<Vec<OutMessage>> {
        let mut out = Vec::new();
        for _ in 0..n {
            out.extend(self.tick(Vec::new(), observer)?);
        }
        Ok(out)
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn spawn_position(&self, agent: AgentId) -> Cell {
        self.env
            .agents
            .iter()
            .find(|a| a.agent_id == agent)
            .map(|a| a.position)
            .unwrap_or(Cell::new(0, 0))
    }

    fn agent_tail_t(&self, agent: AgentId) -> whca_core::Time {
        self.table.path_of(agent).last().map(|tc| tc.t).unwrap_or(0)
    }

    fn ensure_goal(&mut self, agent: AgentId) -> Cell {
        if let Some(&g) = self.goals.get(&agent) {
            return g;
        }
        let position = self.spawn_position(agent);
        let goal = self.orders.assign(agent, position);
        self.goals.insert(agent, goal);
        goal
    }

    /// Step 3a–3d plus the step-4 eviction handling and step-7 goal-reached
    /// handling for one agent's turn within this tick's sweep.
    fn step_agent<O: CoordinatorObserver>(
        &mut self,
        agent: AgentId,
        observer: &mut O,
    ) -> CoordinatorResult<()> {
        if !self.searches.contains_key(&agent) {
            let start = match self.table.path_of(agent).last() {
                Some(&tc) => tc,
                None => self.spawn_position(agent).at_time(0),
            };
            let goal = self.ensure_goal(agent);
            self.searches.insert(agent, SearchState::new(&self.env, agent, start, goal));
        }

        let mut search = self.searches.remove(&agent).expect("just ensured live");
        let result = search.step_window(&self.env, &mut self.table, &self.cfg);
        self.searches.insert(agent, search);

        match result? {
            WindowResult::Committed(window) => {
                observer.on_window_committed(agent, &window);
                self.stitch_window(agent, window)?;
            }
            WindowResult::Blocked { evicted } => {
                observer.on_agent_blocked(agent, evicted);
                self.handle_eviction(evicted);
            }
            WindowResult::Unreachable => {
                return Err(CoordinatorError::UnreachableGoal { agent });
            }
        }
        Ok(())
    }

    /// Appends a newly committed window to `agent`'s pending-emission
    /// buffer, dropping a duplicate leading seam. If the goal is reached
    /// within the window, finishes the order and queues a rebuild.
    fn stitch_window(&mut self, agent: AgentId, window: Vec<TimedCell>) -> CoordinatorResult<()> {
        let goal = self.goals.get(&agent).copied().unwrap_or_else(|| self.spawn_position(agent));
        let buf = self.pending_paths.entry(agent).or_default();

        let mut reached_at = None;
        for tc in window {
            if buf.last() == Some(&tc) {
                continue;
            }
            buf.push(tc);
            if tc.to_cell() == goal {
                reached_at = Some(tc.t);
            }
        }

        if let Some(t) = reached_at {
            // Only a goal backed by a real assignment can be "finished" — an
            // agent idling at its own spawn (no order ever popped for it)
            // reaches its own goal trivially every window without ever
            // having one to complete.
            if self.orders.current_assignment(agent).is_some() {
                self.orders.agent_finished_task(agent, t)?;
            }
            let next_goal = self.orders.assign(agent, goal);
            self.goals.insert(agent, next_goal);
            self.searches.remove(&agent);
        }
        Ok(())
    }

    /// Step 4: discard `evicted`'s search so it rebuilds from its new
    /// (truncated) path tail, and re-queue any of its finished orders whose
    /// completion tick was retracted.
    fn handle_eviction(&mut self, evicted: AgentId) {
        self.searches.remove(&evicted);
        let new_tail = self.agent_tail_t(evicted);
        self.orders.validate_finished_tasks(new_tail + 1, evicted);
    }

    /// Steps 6 & 8: emit the longest prefix of `agent`'s pending path whose
    /// distance from both the path's own end and the fleet-wide `min_t` is
    /// past the emission threshold, then emit `OrderFinished` for any
    /// completions that prefix now covers.
    fn emit_prefix(
        &mut self,
        agent: AgentId,
        min_t: whca_core::Time,
        out: &mut Vec<OutMessage>,
    ) -> CoordinatorResult<()> {
        let threshold = self.cfg.emission_threshold();
        let Some(buf) = self.pending_paths.get_mut(&agent) else {
            return Ok(());
        };
        if buf.is_empty() {
            return Ok(());
        }
        let last_time = buf.last().unwrap().t;

        let mut cut = None;
        for (i, tc) in buf.iter().enumerate() {
            if last_time - tc.t > threshold && min_t - tc.t > threshold {
                cut = Some(i);
            }
        }
        let Some(cut) = cut else {
            return Ok(());
        };

        let prefix: Vec<TimedCell> = buf.drain(..=cut).collect();
        let sent_last_t = prefix.last().unwrap().t;
        let path = prefix.into_iter().map(|tc| PathStep { x: tc.x, y: tc.y, time_step: tc.t }).collect();
        out.push(OutMessage::AgentPath { agent_id: agent, path });

        for (_done_at, order) in self.orders.iterate_finished_orders_before(agent, sent_last_t + 1) {
            out.push(OutMessage::OrderFinished { order_id: order.order_id, agent_id: agent });
        }
        Ok(())
    }
}
