//! whca-demo — smallest example of the WHCA* planning core.
//!
//! Four agents share a 10x10 warehouse grid with a couple of pillars. Two
//! delivery orders and a pickup/freeup pair are submitted up front; the
//! coordinator is then driven tick by tick until every order finishes.

use anyhow::Result;

use whca_core::{Agent, AgentId, Cell, CellState, Environment, Order, OrderId, OrderType, WhcaConfig};
use whca_coordinator::{CoordinatorObserver, CoreBuilder, InMessage, NoopObserver, OutMessage};

const GRID: i32 = 10;
const MAX_TICKS: u64 = 400;

struct PrintingObserver;

impl CoordinatorObserver for PrintingObserver {
    fn on_agent_blocked(&mut self, blocked: AgentId, evicted: AgentId) {
        println!("  agent {blocked} blocked agent {evicted}'s path; retracting and replanning");
    }
}

fn build_environment() -> Environment {
    let agents = vec![
        Agent::new(AgentId(0), Cell::new(0, 0)),
        Agent::new(AgentId(1), Cell::new(9, 0)),
        Agent::new(AgentId(2), Cell::new(0, 9)),
        Agent::new(AgentId(3), Cell::new(9, 9)),
    ];
    let mut env = Environment::empty(GRID, GRID);
    env.agents = agents;
    for y in 3..7 {
        env.set_cell_state(Cell::new(5, y), CellState::Blocked);
    }
    env
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order { order_id: OrderId(0), order_type: OrderType::Delivery, goal: Cell::new(9, 9), pallet_id: 1 },
        Order { order_id: OrderId(1), order_type: OrderType::Delivery, goal: Cell::new(0, 0), pallet_id: 2 },
        Order { order_id: OrderId(2), order_type: OrderType::Pickup, goal: Cell::new(4, 4), pallet_id: 3 },
        Order { order_id: OrderId(3), order_type: OrderType::Delivery, goal: Cell::new(8, 2), pallet_id: 4 },
    ]
}

fn main() -> Result<()> {
    println!("=== whca-demo — windowed hierarchical cooperative A* ===");
    println!("Grid: {GRID}x{GRID}  |  Agents: 4  |  Window: 8");
    println!();

    let env = build_environment();
    let mut core = CoreBuilder::new(env, WhcaConfig::default()).build();
    let mut observer = PrintingObserver;

    let mut finished_orders = 0usize;
    let mut path_rows = 0usize;

    let mut total_messages = 0usize;
    let mut inbound = vec![InMessage::Orders(seed_orders())];

    for tick in 0..MAX_TICKS {
        if finished_orders >= 4 {
            break;
        }
        let batch = core.tick(std::mem::take(&mut inbound), &mut observer)?;
        for msg in &batch {
            match msg {
                OutMessage::AgentPath { agent_id, path } => {
                    path_rows += path.len();
                    let last = path.last().unwrap();
                    println!(
                        "tick {tick}: agent {agent_id} path +{len} steps, last ({x}, {y}) @ t={t}",
                        len = path.len(),
                        x = last.x,
                        y = last.y,
                        t = last.time_step,
                    );
                }
                OutMessage::OrderFinished { order_id, agent_id } => {
                    finished_orders += 1;
                    println!("tick {tick}: order {order_id} finished by agent {agent_id}");
                }
            }
        }
        total_messages += batch.len();
    }

    println!();
    println!("Finished {finished_orders} orders, emitted {path_rows} path steps across {total_messages} messages");
    Ok(())
}
