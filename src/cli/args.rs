//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Classify and render links for a tola site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for tola.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override site URL; its host decides which links are external and
    /// its path becomes the path prefix.
    ///
    /// Example: tola-link -U "https://tola-ssg.github.io/example-sites/starter" classify /about
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override path prefix (e.g. "/blog", or "/" for none)
    #[arg(short = 'p', long = "path-prefix", global = true)]
    pub path_prefix: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show how each URL would be rendered
    #[command(visible_alias = "c")]
    Classify {
        #[command(flatten)]
        args: ClassifyArgs,
    },

    /// Render a single link as an `<a>` element
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Render link requests from a JSON array or JSON lines
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
}

/// Classify command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// URLs to classify
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Output one JSON object per line
    #[arg(short, long)]
    pub json: bool,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Link target (takes precedence over --href)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Legacy link target, used when --to is absent
    #[arg(long)]
    pub href: Option<String>,

    /// Pass-through attribute as key=value (repeatable); a bare key sets
    /// a boolean attribute
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    pub attrs: Vec<String>,

    /// Link text (defaults to the URL)
    #[arg(long)]
    pub text: Option<String>,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Input file; `-` or omitted reads stdin
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}
