//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::content::{ContentKind, Facet};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Filter and paging arguments for `list`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page to show (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page (default: [pagination.per_page])
    #[arg(long = "per-page")]
    pub per_page: Option<usize>,

    /// Only items in this category ("all" for no constraint)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only items with this status (papers and projects)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Only items carrying this tag, keyword or technology
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Earliest date, inclusive (YYYY or YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, inclusive (YYYY or YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Free-text search term
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List one page of a collection
    List {
        /// Collection to list
        #[arg(value_enum)]
        kind: ContentKind,

        #[command(flatten)]
        args: ListArgs,
    },

    /// Show a single document by slug
    Show {
        /// Collection to search
        #[arg(value_enum)]
        kind: ContentKind,

        /// Document slug
        slug: String,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the distinct values of a field, for filter options
    Facets {
        /// Collection to inspect
        #[arg(value_enum)]
        kind: ContentKind,

        /// Field to collect
        #[arg(value_enum)]
        facet: Facet,
    },
}
