//! The order tracker: intake FIFO, per-agent assignment, and per-agent
//! completion history.

use std::collections::{HashMap, VecDeque};

use whca_core::{AgentId, Cell, Order, OrderType, Time};

use crate::error::{OrdersError, OrdersResult};

/// Tracks orders from intake through assignment to completion.
#[derive(Default)]
pub struct OrderTracker {
    unassigned: VecDeque<Order>,
    assigned: HashMap<AgentId, Order>,
    /// Ascending by completion time within each agent's deque.
    finished: HashMap<AgentId, VecDeque<(Time, Order)>>,
}

impl OrderTracker {
    pub fn new() -> Self {
        OrderTracker::default()
    }

    /// Appends newly received orders to the unassigned FIFO.
    pub fn add_orders(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.unassigned.extend(orders);
    }

    pub fn unassigned_len(&self) -> usize {
        self.unassigned.len()
    }

    pub fn current_assignment(&self, agent: AgentId) -> Option<&Order> {
        self.assigned.get(&agent)
    }

    /// Picks `agent`'s next goal. If `agent` just completed a non-delivery
    /// order, the scan looks ahead for the next delivery of a *different*
    /// pallet, pushing anything skipped back to the front in its original
    /// order. Otherwise the FIFO head is taken directly. Returns `position`
    /// (park in place) if no order was available.
    pub fn assign(&mut self, agent: AgentId, position: Cell) -> Cell {
        let just_finished_other_pallet = self
            .finished
            .get(&agent)
            .and_then(|f| f.front())
            .filter(|(_, order)| order.order_type != OrderType::Delivery)
            .map(|(_, order)| order.pallet_id);

        let picked = match just_finished_other_pallet {
            Some(pallet_id) => self.pop_next_delivery_excluding(pallet_id),
            None => self.unassigned.pop_front(),
        };

        match picked {
            Some(order) => {
                let goal = order.goal;
                self.assigned.insert(agent, order);
                goal
            }
            None => position,
        }
    }

    fn pop_next_delivery_excluding(&mut self, pallet_id: u32) -> Option<Order> {
        let mut skipped = Vec::new();
        let found = loop {
            match self.unassigned.pop_front() {
                None => break None,
                Some(order) if order.order_type == OrderType::Delivery && order.pallet_id != pallet_id => {
                    break Some(order);
                }
                Some(order) => skipped.push(order),
            }
        };
        for order in skipped.into_iter().rev() {
            self.unassigned.push_front(order);
        }
        found
    }

    /// Moves `agent`'s current assignment to its finished history, stamped
    /// with completion time `t`.
    pub fn agent_finished_task(&mut self, agent: AgentId, t: Time) -> OrdersResult<()> {
        let order = self.assigned.remove(&agent).ok_or(OrdersError::NoAssignedOrder(agent))?;
        self.finished.entry(agent).or_default().push_back((t, order));
        Ok(())
    }

    /// Pops and returns every finished order of `agent` completed strictly
    /// before `t`, oldest first.
    pub fn iterate_finished_orders_before(&mut self, agent: AgentId, t: Time) -> Vec<(Time, Order)> {
        let Some(finished) = self.finished.get_mut(&agent) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        while let Some(&(done_at, _)) = finished.front() {
            if done_at >= t {
                break;
            }
            out.push(finished.pop_front().unwrap());
        }
        out
    }

    /// Reverts any of `agent`'s finished orders recorded at or after
    /// `t_cutoff` back to the unassigned FIFO (their backing path was
    /// retracted by a deadlock break), preserving their relative order.
    pub fn validate_finished_tasks(&mut self, t_cutoff: Time, agent: AgentId) {
        let Some(finished) = self.finished.get_mut(&agent) else {
            return;
        };
        while let Some(&(done_at, _)) = finished.back() {
            if done_at < t_cutoff {
                break;
            }
            let (_, order) = finished.pop_back().unwrap();
            self.unassigned.push_front(order);
        }
    }
}
