//! Cost model: price of a selection and of the auto-block presets.

#[cfg(test)]
#[path = "cost_test.rs"]
mod cost_test;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::grid::block_side;

/// Total price of `cells` cells at `price_per_cell` dollars each.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn total_cost(cells: usize, price_per_cell: f64) -> f64 {
    cells as f64 * price_per_cell
}

/// Format a dollar amount with two decimals, e.g. `$25.00`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// One auto-block preset as offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockPreset {
    /// Target number of cells.
    pub cells: usize,
    /// Side of the square scanned for the block.
    pub side: usize,
    /// Price of the full block.
    pub cost: f64,
}

/// Presets from `config`, each with its square side and full-block price.
#[must_use]
pub fn block_presets(config: &EngineConfig) -> Vec<BlockPreset> {
    config
        .block_presets
        .iter()
        .map(|&cells| BlockPreset { cells, side: block_side(cells), cost: total_cost(cells, config.price_per_cell) })
        .collect()
}
