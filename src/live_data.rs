//! Simulated live order updates.

use crate::consts::cli_consts::timers::LIVE_UPDATE_PROBABILITY;
use crate::tables::{DataTable, OrderStatus};
use rand::Rng;
use rand::seq::SliceRandom;

#[cfg(test)]
use mockall::automock;

/// Source of status changes for rows carrying a status badge.
#[cfg_attr(test, automock)]
pub trait LiveDataFeed {
    /// A new status for the row, or `None` to leave it alone.
    fn next_status(&mut self, current: OrderStatus) -> Option<OrderStatus>;
}

/// Gives each row a small chance of moving to a random live status.
#[derive(Debug)]
pub struct SimulatedFeed<R: Rng> {
    rng: R,
    probability: f64,
}

impl<R: Rng> SimulatedFeed<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            probability: LIVE_UPDATE_PROBABILITY,
        }
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl<R: Rng> LiveDataFeed for SimulatedFeed<R> {
    fn next_status(&mut self, _current: OrderStatus) -> Option<OrderStatus> {
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        OrderStatus::LIVE.choose(&mut self.rng).copied()
    }
}

/// Applies one round of updates to a table. Returns the number of rows
/// whose status was rewritten.
pub fn update_recent_orders(table: &mut DataTable, feed: &mut dyn LiveDataFeed) -> usize {
    let mut updated = 0;
    for row in table.rows.iter_mut() {
        let id = row.id().to_string();
        let Some(status) = row.status_mut() else {
            continue;
        };
        if let Some(next) = feed.next_status(*status) {
            log::debug!("Order {}: {} -> {}", id, status.label(), next.label());
            *status = next;
            updated += 1;
        }
    }
    updated
}
