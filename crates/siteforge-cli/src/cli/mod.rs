//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "siteforge",
    bin_name = "siteforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Template-driven websites and APIs",
    long_about = "Siteforge instantiates complete website designs from a \
                  template catalog and generates REST API source code from \
                  database, OpenAPI, or config schemas.",
    after_help = "EXAMPLES:\n\
        \x20 siteforge export landing-01 --format static --output ./site\n\
        \x20 siteforge generate --from database --source blog --output ./api\n\
        \x20 siteforge list templates\n\
        \x20 siteforge completions bash > /usr/share/bash-completion/completions/siteforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Instantiate a design from a template and export it.
    #[command(
        visible_alias = "x",
        about = "Export a design built from a template",
        after_help = "EXAMPLES:\n\
            \x20 siteforge export landing-01\n\
            \x20 siteforge export aurora-glass-07 --format static --output ./dist\n\
            \x20 siteforge export portfolio-01 --customizations '{\"accent\":\"#f00\"}'"
    )]
    Export(ExportArgs),

    /// Generate REST API source code from a schema.
    #[command(
        visible_alias = "gen",
        about = "Generate API code from a schema",
        after_help = "EXAMPLES:\n\
            \x20 siteforge generate --from database --source blog --output ./api\n\
            \x20 siteforge generate --from openapi --source ./openapi.json --output ./api\n\
            \x20 siteforge generate --from config --source ./models.json --dry-run"
    )]
    Generate(GenerateArgs),

    /// List catalog contents.
    #[command(
        visible_alias = "ls",
        about = "List templates, components, or themes",
        after_help = "EXAMPLES:\n\
            \x20 siteforge list templates\n\
            \x20 siteforge list components --format json\n\
            \x20 siteforge list themes"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 siteforge completions bash > ~/.local/share/bash-completion/completions/siteforge\n\
            \x20 siteforge completions zsh  > ~/.zfunc/_siteforge\n\
            \x20 siteforge completions fish > ~/.config/fish/completions/siteforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Siteforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 siteforge config get defaults.format\n\
            \x20 siteforge config list\n\
            \x20 siteforge config path"
    )]
    Config(ConfigCommands),
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `siteforge export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Template id to instantiate (see `siteforge list templates`).
    #[arg(value_name = "TEMPLATE", help = "Template id to instantiate")]
    pub template: String,

    /// Export format. Parsed at runtime so unknown formats report the full
    /// supported set. Falls back to `defaults.format` from the config file,
    /// then to html.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        help = "Export format: html, static, react, vue [default: html]"
    )]
    pub format: Option<String>,

    /// Destination directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: auto-named with a timestamp)"
    )]
    pub output: Option<PathBuf>,

    /// Project reference recorded on the design document.
    #[arg(long = "project", value_name = "REF", help = "Owning project reference")]
    pub project: Option<String>,

    /// Free-form customization payload, stored on the design verbatim.
    #[arg(
        long = "customizations",
        value_name = "JSON",
        help = "JSON object stored on the design document"
    )]
    pub customizations: Option<String>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be exported without writing")]
    pub dry_run: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `siteforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema source kind.
    #[arg(
        long = "from",
        value_enum,
        value_name = "KIND",
        help = "Schema source kind"
    )]
    pub from: SchemaKind,

    /// Source locator: a data-source name for `database`, a JSON file path
    /// for `openapi` and `config`.
    #[arg(
        short = 's',
        long = "source",
        value_name = "SOURCE",
        help = "Data source name or schema file path"
    )]
    pub source: String,

    /// Destination directory for the generated project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (omit to only report what would be generated)"
    )]
    pub output: Option<PathBuf>,

    /// Generated package name. Falls back to `defaults.package_name` from
    /// the config file.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Name for the generated API package [default: generated-api]"
    )]
    pub name: Option<String>,

    /// Generated package version.
    #[arg(
        long = "package-version",
        value_name = "VERSION",
        default_value = "0.1.0",
        help = "Version for the generated API package"
    )]
    pub package_version: String,

    /// Report files and endpoints without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

/// Supported schema source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SchemaKind {
    Database,
    #[value(alias = "oas")]
    Openapi,
    Config,
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database => write!(f, "database"),
            Self::Openapi => write!(f, "openapi"),
            Self::Config => write!(f, "config"),
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `siteforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list.
    #[arg(
        value_enum,
        value_name = "KIND",
        default_value = "templates",
        help = "Catalog section to list"
    )]
    pub kind: CatalogKind,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CatalogKind {
    Templates,
    Components,
    Themes,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `siteforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `siteforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
