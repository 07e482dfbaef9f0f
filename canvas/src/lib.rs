//! Grid selection engine for the pixel board.
//!
//! A user claims cells on a fixed-size grid by painting, dragging rectangles,
//! or dropping preset blocks, while cells owned by others stay off limits and
//! a capacity cap bounds the claim. This crate owns the whole interaction:
//! mapping pointer positions to cells, tracking the gesture in progress,
//! enforcing the selection invariants, pricing the result, and producing the
//! handoff record for checkout. The host is responsible only for delivering
//! input events, drawing from the exposed state, and storing the record.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] and the outbound [`engine::Action`]s |
//! | [`selection`] | Selection store with bounds, collision, and capacity rules |
//! | [`occupancy`] | Read-only index of cells claimed by others |
//! | [`input`] | Tools, modes, and the gesture state machine |
//! | [`camera`] | Pan/zoom viewport and pointer-to-cell mapping |
//! | [`grid`] | Cells, cell rectangles, and block geometry |
//! | [`config`] | Per-deployment engine configuration and validation |
//! | [`cost`] | Pricing |
//! | [`handoff`] | Handoff record and key-value persistence |
//! | [`consts`] | Shared defaults (grid size, zoom limits, presets, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod cost;
pub mod engine;
pub mod grid;
pub mod handoff;
pub mod input;
pub mod occupancy;
pub mod selection;
