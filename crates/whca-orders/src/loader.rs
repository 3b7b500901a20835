//! CSV order loader, for offline scenario construction and testing.
//!
//! # CSV format
//!
//! One row per order:
//!
//! ```csv
//! order_id,order_type,goal_x,goal_y,pallet_id
//! 0,pickup,4,2,17
//! 1,delivery,9,9,17
//! 2,freeup,0,0,0
//! ```
//!
//! This is additive: the coordinator's `tick()` loop only ever ingests
//! orders from the inbound `Orders` message. This loader produces the same
//! [`Order`] values for offline use.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use whca_core::{Cell, Order, OrderId, OrderType};

use crate::error::{OrdersError, OrdersResult};

#[derive(Deserialize)]
struct OrderRecord {
    order_id: u32,
    order_type: String,
    goal_x: i32,
    goal_y: i32,
    pallet_id: u32,
}

/// Loads orders from a CSV file at `path`.
pub fn load_orders_csv(path: &Path) -> OrdersResult<Vec<Order>> {
    let file = std::fs::File::open(path).map_err(OrdersError::Io)?;
    load_orders_reader(file)
}

/// Like [`load_orders_csv`] but accepts any `Read` source — useful for
/// testing with a `std::io::Cursor`.
pub fn load_orders_reader<R: Read>(reader: R) -> OrdersResult<Vec<Order>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut orders = Vec::new();
    for result in csv_reader.deserialize::<OrderRecord>() {
        let row = result.map_err(|e| OrdersError::Parse(e.to_string()))?;
        orders.push(Order {
            order_id: OrderId(row.order_id),
            order_type: parse_order_type(&row.order_type)?,
            goal: Cell::new(row.goal_x, row.goal_y),
            pallet_id: row.pallet_id,
        });
    }
    Ok(orders)
}

fn parse_order_type(s: &str) -> OrdersResult<OrderType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "pickup" => Ok(OrderType::Pickup),
        "delivery" => Ok(OrderType::Delivery),
        "freeup" => Ok(OrderType::Freeup),
        other => Err(OrdersError::Parse(format!(
            "invalid order_type {other:?}: expected \"pickup\", \"delivery\", or \"freeup\""
        ))),
    }
}
