//! # moe-history
//!
//! Recent-history graph layout and rendering for MOE internal/public revision
//! timelines.
//!
//! ## Features
//!
//! | Feature | Crate | Description |
//! |---------|-------|-------------|
//! | `graph` | [`moe-history-graph`] | Layout, surfaces, correspondence graph, validation |
//! | `wasm`  | [`moe-history-graph`] | JavaScript bindings for the history page |
//!
//! `default = ["graph"]`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! moe-history = "0.1"
//! ```
//!
//! ```rust,ignore
//! use moe_history::{RecentHistory, RevisionGraphRenderer};
//!
//! let history = RecentHistory::from_json(blob)?;
//! let svg = RevisionGraphRenderer::with_spacing(100.0, 24.0)?.to_svg(&history);
//! ```

#[cfg(feature = "graph")]
pub use moe_history_graph as graph;

#[cfg(feature = "graph")]
pub use moe_history_graph::{
    render_ascii, Column, Element, HistoryError, HistoryGraph, RecentHistory, RenderOptions,
    RevId, RevisionGraphRenderer, RowZeroPolicy, SvgSurface,
};
