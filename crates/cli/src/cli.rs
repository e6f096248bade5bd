use clap::{Parser, Subcommand, ValueEnum};
use moe_history_graph::Column;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "moe-history",
    about = "Render and inspect MOE recent-history graphs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lay out and draw a recent history
    Render {
        /// Recent-history JSON file (`-` or omitted for stdin)
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Horizontal distance between the columns (overrides --config)
        #[arg(long)]
        column_spacing: Option<f64>,

        /// Vertical distance between rows (overrides --config)
        #[arg(long)]
        row_spacing: Option<f64>,

        /// Draw relationships that touch the first row of a column
        #[arg(long)]
        resolve_first_row: bool,

        /// JSON file with render options
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Report duplicate ids, unresolved endpoints and hidden edges
    Validate {
        /// Recent-history JSON file (`-` or omitted for stdin)
        input: Option<PathBuf>,

        /// Check against the resolving row-zero policy
        #[arg(long)]
        resolve_first_row: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize revisions and relationships
    Stats {
        /// Recent-history JSON file (`-` or omitted for stdin)
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the revisions related to one revision
    Related {
        /// Revision id to look up
        rev_id: String,

        /// Recent-history JSON file (`-` or omitted for stdin)
        input: Option<PathBuf>,

        /// Column the revision belongs to
        #[arg(long, value_enum, default_value_t = ColumnArg::Internal)]
        column: ColumnArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Ascii,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    Internal,
    Public,
}

impl From<ColumnArg> for Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Internal => Column::Internal,
            ColumnArg::Public => Column::Public,
        }
    }
}
