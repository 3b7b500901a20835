//! The four message shapes the core consumes and produces. An opaque
//! transport (a channel, a pub/sub bus, an HTTP adapter) is the caller's
//! concern — `tick` only ever sees and returns these plain values.

use whca_core::{AgentId, Cell, Environment, Order, OrderId, Time};

/// A single map object as received from the external `Map` message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapObjectType {
    Agent,
    Pillar,
    Stack,
    PickupStation,
    MaintenanceArea,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapObject {
    pub coordinates: Cell,
    pub object_type: MapObjectType,
    pub object_id: u32,
}

/// Inbound message shapes, per the external interface.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InMessage {
    /// Received once at startup; converted into the core's `Environment`.
    /// Pillar objects become blocked cells; agent objects seed the agent
    /// list. A `Map` received after startup wholesale-replaces the
    /// environment — the new object list is the entire fleet and layout from
    /// that tick on, not a merge into the previous one. Reservation and order
    /// state for an agent missing from the new list is left in place but
    /// orphaned, since nothing reads it without the agent appearing in
    /// `env.agents` again.
    Map { width_units: i32, height_units: i32, objects: Vec<MapObject> },
    /// Appended to the order tracker's unassigned FIFO.
    Orders(Vec<Order>),
    /// Terminates the loop after this tick.
    GlobalStop,
}

/// A single emitted timestep of a committed path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub x: i32,
    pub y: i32,
    pub time_step: Time,
}

/// Outbound message shapes, per the external interface.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutMessage {
    /// Incremental path emission for one agent. Timesteps are strictly
    /// increasing across successive `AgentPath` messages for the same agent.
    AgentPath { agent_id: AgentId, path: Vec<PathStep> },
    OrderFinished { order_id: OrderId, agent_id: AgentId },
}

/// Converts a received `Map` message into a static [`Environment`].
pub(crate) fn environment_from_map(
    width_units: i32,
    height_units: i32,
    objects: &[MapObject],
) -> Environment {
    let mut env = Environment::empty(width_units, height_units);
    for obj in objects {
        match obj.object_type {
            MapObjectType::Pillar => {
                env.set_cell_state(obj.coordinates, whca_core::CellState::Blocked);
            }
            MapObjectType::Agent => {
                env.agents.push(whca_core::Agent::new(AgentId(obj.object_id), obj.coordinates));
            }
            MapObjectType::Stack | MapObjectType::PickupStation | MapObjectType::MaintenanceArea => {}
        }
    }
    env
}
