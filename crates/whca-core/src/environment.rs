//! The static grid and the agents/orders that live on it.

use crate::{AgentId, Cell, CellState, OrderId};

/// An agent's identity and spawn/home cell. The agent's *live* position is
/// not tracked here — it lives in the reservation table's committed path for
/// that agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub agent_id: AgentId,
    pub position: Cell,
}

impl Agent {
    #[inline]
    pub const fn new(agent_id: AgentId, position: Cell) -> Self {
        Agent { agent_id, position }
    }
}

/// The kind of work an order represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderType {
    Pickup,
    Delivery,
    Freeup,
}

/// An immutable unit of work: move to `goal` and interact with `pallet_id`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_id: OrderId,
    pub order_type: OrderType,
    pub goal: Cell,
    pub pallet_id: u32,
}

/// The static warehouse grid plus the agents placed on it.
///
/// Immutable after construction except for the `agents` list, which grows
/// only if the external `Map` collaborator re-sends a superset including new
/// agents (not exercised by the planning core itself).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    pub x_dim: i32,
    pub y_dim: i32,
    grid: Vec<CellState>,
    pub agents: Vec<Agent>,
}

impl Environment {
    /// Build an environment from explicit dimensions and a row-major
    /// `x_dim * y_dim` grid (index = `y * x_dim + x`).
    ///
    /// # Panics
    ///
    /// Panics if `grid.len() != x_dim * y_dim` — this indicates a construction
    /// bug in the caller, not a runtime condition to recover from.
    pub fn new(x_dim: i32, y_dim: i32, grid: Vec<CellState>, agents: Vec<Agent>) -> Self {
        assert_eq!(
            grid.len(),
            (x_dim as usize) * (y_dim as usize),
            "grid length does not match x_dim * y_dim"
        );
        Environment { x_dim, y_dim, grid, agents }
    }

    /// An `x_dim` × `y_dim` environment with every cell free and no agents.
    pub fn empty(x_dim: i32, y_dim: i32) -> Self {
        let grid = vec![CellState::Free; (x_dim as usize) * (y_dim as usize)];
        Environment { x_dim, y_dim, grid, agents: Vec::new() }
    }

    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.x_dim && c.y < self.y_dim
    }

    /// State of `c`. Cells outside the grid are [`CellState::Blocked`] so
    /// callers never need a separate bounds check before a free-ness query.
    #[inline]
    pub fn cell_state(&self, c: Cell) -> CellState {
        if !self.in_bounds(c) {
            return CellState::Blocked;
        }
        self.grid[(c.y as usize) * (self.x_dim as usize) + (c.x as usize)]
    }

    #[inline]
    pub fn set_cell_state(&mut self, c: Cell, state: CellState) {
        assert!(self.in_bounds(c), "cell {c} out of bounds");
        let idx = (c.y as usize) * (self.x_dim as usize) + (c.x as usize);
        self.grid[idx] = state;
    }

    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        self.cell_state(c).is_free()
    }

    /// The 4-connected neighbors of `c` that are in bounds and not statically
    /// blocked.
    pub fn free_neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors().into_iter().filter(move |&nb| self.is_free(nb))
    }
}
