#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn cost_of_nothing_is_zero() {
    assert_eq!(total_cost(0, 0.10), 0.0);
}

#[test]
fn cost_is_count_times_price() {
    assert!(approx_eq(total_cost(250, 0.10), 25.0));
    assert!(approx_eq(total_cost(1, 0.10), 0.10));
    assert!(approx_eq(total_cost(2500, 0.10), 250.0));
    assert!(approx_eq(total_cost(7, 1.5), 10.5));
}

#[test]
fn format_usd_two_decimals() {
    assert_eq!(format_usd(total_cost(250, 0.10)), "$25.00");
    assert_eq!(format_usd(0.1), "$0.10");
    assert_eq!(format_usd(0.0), "$0.00");
    assert_eq!(format_usd(1234.5), "$1234.50");
}

#[test]
fn presets_carry_side_and_cost() {
    let presets = block_presets(&EngineConfig::open_canvas());
    let summary: Vec<(usize, usize)> = presets.iter().map(|p| (p.cells, p.side)).collect();
    assert_eq!(summary, vec![(100, 10), (200, 15), (500, 23), (1000, 32), (2500, 50)]);
    assert!(approx_eq(presets[0].cost, 10.0));
    assert!(approx_eq(presets[4].cost, 250.0));
}

#[test]
fn presets_follow_config_price() {
    let mut cfg = EngineConfig::open_canvas();
    cfg.price_per_cell = 1.0;
    cfg.block_presets = vec![9];
    let presets = block_presets(&cfg);
    assert_eq!(presets, vec![BlockPreset { cells: 9, side: 3, cost: 9.0 }]);
}
