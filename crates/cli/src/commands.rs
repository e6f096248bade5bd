//! Subcommand implementations. Each returns its output as a string so `main`
//! owns all printing.

use crate::cli::Format;
use anyhow::{bail, Context};
use moe_history_graph::{
    render_ascii, Column, HistoryGraph, RecentHistory, RenderOptions, RevId,
    RevisionGraphRenderer, RowZeroPolicy, SceneRepr, ValidationResultRepr,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Read a recent history from a file, or from stdin for `-` or no path.
pub fn load_history(input: Option<&Path>) -> anyhow::Result<RecentHistory> {
    match input {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            RecentHistory::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        _ => {
            tracing::debug!("reading recent history from stdin");
            RecentHistory::from_reader(io::stdin().lock())
                .context("failed to parse recent history from stdin")
        }
    }
}

/// Build render options from an optional config file, then apply flags.
pub fn render_options(
    config: Option<&Path>,
    column_spacing: Option<f64>,
    row_spacing: Option<f64>,
    resolve_first_row: bool,
) -> anyhow::Result<RenderOptions> {
    let mut options = match config {
        Some(path) => RenderOptions::from_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => RenderOptions::default(),
    };

    if let Some(spacing) = column_spacing {
        options = options.with_column_spacing(spacing);
    }
    if let Some(spacing) = row_spacing {
        options = options.with_row_spacing(spacing);
    }
    if resolve_first_row {
        options = options.with_row_zero(RowZeroPolicy::Resolve);
    }

    options.validate()?;
    Ok(options)
}

pub fn render(
    history: &RecentHistory,
    options: RenderOptions,
    format: Format,
) -> anyhow::Result<String> {
    match format {
        Format::Ascii => Ok(render_ascii(history, &options).trim_end().to_string()),
        Format::Svg => Ok(RevisionGraphRenderer::new(options)?.to_svg(history)),
        Format::Json => {
            let renderer = RevisionGraphRenderer::new(options)?;
            let scene = SceneRepr::from(&renderer.layout(history));
            serde_json::to_string_pretty(&scene).context("failed to serialize scene")
        }
    }
}

pub struct ValidationReport {
    pub output: String,
    /// No errors; warnings alone still pass
    pub passed: bool,
}

pub fn validate(
    history: &RecentHistory,
    resolve_first_row: bool,
    json: bool,
) -> anyhow::Result<ValidationReport> {
    let policy = if resolve_first_row {
        RowZeroPolicy::Resolve
    } else {
        RowZeroPolicy::SkipFirstRow
    };
    let result = history.validate(policy);
    let passed = result.is_ok();

    let output = if json {
        let repr = ValidationResultRepr::from(&result);
        let mut out =
            serde_json::to_string_pretty(&repr).context("failed to serialize validation result")?;
        out.push('\n');
        out
    } else {
        let mut out = String::new();
        for error in &result.errors {
            out.push_str(&format!("error: {}\n", error.message()));
        }
        for warning in &result.warnings {
            out.push_str(&format!("warning: {}\n", warning.message()));
        }
        out.push_str(&format!(
            "{} error(s), {} warning(s)\n",
            result.errors.len(),
            result.warnings.len()
        ));
        out
    };

    Ok(ValidationReport { output, passed })
}

pub fn stats(history: &RecentHistory, json: bool) -> anyhow::Result<String> {
    let stats = HistoryGraph::from_history(history).stats();

    if json {
        let mut out = serde_json::to_string_pretty(&stats).context("failed to serialize stats")?;
        out.push('\n');
        return Ok(out);
    }

    Ok(format!(
        "Internal revisions: {}\n\
         Public revisions:   {}\n\
         Equivalences:       {}\n\
         Exports:            {}\n\
         Imports:            {}\n\
         Unresolved:         {}\n",
        stats.internal_revisions,
        stats.public_revisions,
        stats.equivalences,
        stats.exports,
        stats.imports,
        stats.unresolved
    ))
}

pub fn related(history: &RecentHistory, column: Column, rev_id: &str) -> anyhow::Result<String> {
    let graph = HistoryGraph::from_history(history);
    let id = RevId::from(rev_id);
    if graph.get_revision(column, &id).is_none() {
        bail!("no {} revision with id {}", column, id);
    }

    let mut out = String::new();
    for (idx, kind) in graph.find_related(column, &id) {
        if let Some(node) = graph.get_node(idx) {
            out.push_str(&format!(
                "{:<11} {} (row {})\n",
                kind.label(),
                node.label(),
                node.row
            ));
        }
    }
    Ok(out)
}
