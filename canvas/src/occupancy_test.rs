use super::*;

fn grid() -> GridConfig {
    GridConfig { cols: 100, rows: 100, cell_size: 20.0 }
}

fn claim(id: u32, x: i64, y: i64, w: u32, h: u32) -> Claim {
    Claim { id, name: format!("claim-{id}"), x, y, w, h, color: 0 }
}

// =============================================================
// build
// =============================================================

#[test]
fn empty_index_contains_nothing() {
    let index = OccupancyIndex::empty();
    assert!(index.is_empty());
    assert!(!index.contains(Cell::new(0, 0)));
}

#[test]
fn build_expands_every_cell() {
    let index = OccupancyIndex::build(vec![claim(1, 20, 15, 10, 5)], &grid()).unwrap();
    assert_eq!(index.len(), 50);
    for x in 20..30 {
        for y in 15..20 {
            assert!(index.contains(Cell::new(x, y)), "missing ({x}, {y})");
        }
    }
}

#[test]
fn build_excludes_neighbours() {
    let index = OccupancyIndex::build(vec![claim(1, 20, 15, 10, 5)], &grid()).unwrap();
    assert!(!index.contains(Cell::new(19, 15)));
    assert!(!index.contains(Cell::new(30, 15)));
    assert!(!index.contains(Cell::new(20, 14)));
    assert!(!index.contains(Cell::new(20, 20)));
}

#[test]
fn abutting_claims_are_legal() {
    let index = OccupancyIndex::build(vec![claim(1, 0, 0, 2, 2), claim(2, 2, 0, 2, 2)], &grid()).unwrap();
    assert_eq!(index.len(), 8);
}

#[test]
fn overlapping_claims_union() {
    let index = OccupancyIndex::build(vec![claim(1, 0, 0, 3, 3), claim(2, 1, 1, 3, 3)], &grid()).unwrap();
    assert_eq!(index.len(), 9 + 9 - 4);
}

#[test]
fn claim_touching_far_edge_is_accepted() {
    let index = OccupancyIndex::build(vec![claim(1, 98, 98, 2, 2)], &grid()).unwrap();
    assert!(index.contains(Cell::new(99, 99)));
}

#[test]
fn zero_width_claim_fails() {
    let err = OccupancyIndex::build(vec![claim(7, 1, 1, 0, 4)], &grid()).unwrap_err();
    assert_eq!(err, OccupancyError::EmptyClaim { id: 7, w: 0, h: 4 });
}

#[test]
fn claim_past_grid_edge_fails() {
    let err = OccupancyIndex::build(vec![claim(3, 95, 0, 10, 1)], &grid()).unwrap_err();
    assert!(matches!(err, OccupancyError::OutOfBounds { id: 3, .. }));
}

#[test]
fn negative_origin_claim_fails() {
    let err = OccupancyIndex::build(vec![claim(4, -1, 0, 2, 2)], &grid()).unwrap_err();
    assert!(matches!(err, OccupancyError::OutOfBounds { id: 4, .. }));
    assert!(err.to_string().contains("claim 4"));
}

#[test]
fn one_bad_claim_fails_the_whole_build() {
    let result = OccupancyIndex::build(vec![claim(1, 0, 0, 2, 2), claim(2, 0, 0, 0, 0)], &grid());
    assert!(result.is_err());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn claim_at_finds_owner() {
    let index = OccupancyIndex::build(vec![claim(1, 0, 0, 2, 2), claim(2, 10, 10, 3, 3)], &grid()).unwrap();
    assert_eq!(index.claim_at(Cell::new(11, 12)).map(|c| c.id), Some(2));
    assert_eq!(index.claim_at(Cell::new(5, 5)), None);
}

#[test]
fn claims_keep_input_order() {
    let index = OccupancyIndex::build(vec![claim(9, 0, 0, 1, 1), claim(3, 5, 5, 1, 1)], &grid()).unwrap();
    let ids: Vec<u32> = index.claims().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 3]);
}

#[test]
fn claim_rect_is_inclusive() {
    let rect = claim(1, 20, 15, 10, 5).rect().unwrap();
    assert_eq!(rect.min, Cell::new(20, 15));
    assert_eq!(rect.max, Cell::new(29, 19));
}

#[test]
fn claim_deserializes_without_optional_fields() {
    let c: Claim = serde_json::from_str(r#"{"id":1,"x":2,"y":3,"w":4,"h":5}"#).unwrap();
    assert_eq!(c.name, "");
    assert_eq!(c.color, 0);
    assert_eq!(c.w, 4);
}

// =============================================================
// Sample claims
// =============================================================

#[test]
fn sample_claims_fit_default_grid() {
    let index = OccupancyIndex::build(sample_claims(), &grid()).unwrap();
    assert_eq!(index.claims().len(), 6);
    assert_eq!(index.len(), 50 + 64 + 36 + 25 + 40 + 16);
    assert_eq!(index.claim_at(Cell::new(25, 17)).map(|c| c.name.as_str()), Some("OpenAI"));
}
