//! WebAssembly bindings for the recent-history graph library.
//!
//! Thin JavaScript-accessible wrappers around the core functionality. All
//! actual logic lives in other modules:
//! - `render/` - SVG, recording and ASCII surfaces
//! - `export` - Serialization types
//! - Core crate - Layout, correspondence graph, validation

use crate::{export, render, HistoryGraph, RecentHistory, RenderOptions, RevisionGraphRenderer};
use wasm_bindgen::prelude::*;

/// Install a panic hook that forwards Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a recent-history JSON blob to SVG markup.
///
/// Spacings are measured by the page (column header width, table row height)
/// and passed in.
#[wasm_bindgen]
pub fn render_svg(history: &str, column_spacing: f64, row_spacing: f64) -> Result<String, JsValue> {
    let history = parse_history(history)?;
    let renderer = RevisionGraphRenderer::with_spacing(column_spacing, row_spacing)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(renderer.to_svg(&history))
}

/// Render with a full options object (styles, row-zero policy, class name).
#[wasm_bindgen]
pub fn render_svg_with_options(history: &str, options: JsValue) -> Result<String, JsValue> {
    let history = parse_history(history)?;
    let options: RenderOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize options: {}", e)))?;
    let renderer =
        RevisionGraphRenderer::new(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(renderer.to_svg(&history))
}

/// Render a recent history as a text table.
#[wasm_bindgen]
pub fn render_ascii(history: &str) -> Result<String, JsValue> {
    let history = parse_history(history)?;
    Ok(render::render_ascii(&history, &RenderOptions::default()))
}

// ============================================================================
// Layout
// ============================================================================

/// Lay out a recent history and return the scene without painting it.
#[wasm_bindgen]
pub fn layout_scene(history: &str, column_spacing: f64, row_spacing: f64) -> Result<JsValue, JsValue> {
    let history = parse_history(history)?;
    let renderer = RevisionGraphRenderer::with_spacing(column_spacing, row_spacing)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let repr = export::SceneRepr::from(&renderer.layout(&history));
    serde_wasm_bindgen::to_value(&repr)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a recent history and return any errors/warnings.
#[wasm_bindgen]
pub fn validate_history(history: &str) -> Result<JsValue, JsValue> {
    let history = parse_history(history)?;
    let result = history.validate(Default::default());
    let repr = export::ValidationResultRepr::from(&result);
    serde_wasm_bindgen::to_value(&repr)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Graph
// ============================================================================

/// Get statistics about the correspondence graph of a history.
#[wasm_bindgen]
pub fn get_history_stats(history: &str) -> Result<JsValue, JsValue> {
    let history = parse_history(history)?;
    let stats = HistoryGraph::from_history(&history).stats();
    serde_wasm_bindgen::to_value(&stats)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Export the correspondence graph as compact JSON.
#[wasm_bindgen]
pub fn export_graph_json(history: &str) -> Result<String, JsValue> {
    let history = parse_history(history)?;
    let repr = export::GraphRepr::from(&HistoryGraph::from_history(&history));
    serde_json::to_string(&repr)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

// ============================================================================
// Utility
// ============================================================================

/// Get the version of the graph library.
#[wasm_bindgen]
pub fn graph_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Internal helpers
// ============================================================================

fn parse_history(json: &str) -> Result<RecentHistory, JsValue> {
    RecentHistory::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse history: {}", e)))
}
