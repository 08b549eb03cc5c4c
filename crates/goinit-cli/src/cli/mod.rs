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
    name    = "goinit",
    bin_name = "goinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Configure and download generated Go projects",
    long_about = "Goinit talks to a Go project generator service: pick a \
                  project type, framework, and Go version, preview the files \
                  the generator would produce, and download the packaged \
                  archive.",
    after_help = "EXAMPLES:\n\
        \x20 goinit preview  --type microservice --module github.com/acme/orders --name orders --description 'order service'\n\
        \x20 goinit generate --type cli-app --framework cobra --module github.com/acme/tool --name tool --description 'ops tool'\n\
        \x20 goinit meta\n\
        \x20 goinit completions bash > /usr/share/bash-completion/completions/goinit",
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
    /// Preview the files the generator would produce.
    #[command(
        visible_alias = "p",
        about = "Preview generated files without downloading",
        after_help = "EXAMPLES:\n\
            \x20 goinit preview --type microservice --module github.com/acme/orders --name orders --description 'order service'\n\
            \x20 goinit preview --type cli-app --filter main\n\
            \x20 goinit preview --type api-server --show go.mod"
    )]
    Preview(PreviewArgs),

    /// Generate the project and download the archive.
    #[command(
        visible_alias = "g",
        about = "Generate a project archive",
        after_help = "EXAMPLES:\n\
            \x20 goinit generate --type microservice --module github.com/acme/orders --name orders --description 'order service'\n\
            \x20 goinit generate --type simple --module github.com/me/hello --name hello --description demo --output ~/Downloads"
    )]
    Generate(GenerateArgs),

    /// Show what the generator service supports.
    #[command(
        about = "Show supported types, frameworks, and Go versions",
        after_help = "EXAMPLES:\n\
            \x20 goinit meta\n\
            \x20 goinit meta --output-format json"
    )]
    Meta(MetaArgs),

    /// Inspect the service's template catalog.
    #[command(
        about = "Template catalog and statistics",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goinit templates catalog\n\
            \x20 goinit templates stats --type microservice --framework gin"
    )]
    Templates(TemplatesCommands),

    /// Configure a project interactively.
    #[cfg(feature = "interactive")]
    #[command(
        visible_alias = "i",
        about = "Interactive project configuration",
        after_help = "EXAMPLES:\n\
            \x20 goinit interactive\n\
            \x20 goinit interactive --output ~/Downloads"
    )]
    Interactive(InteractiveArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goinit completions bash > ~/.local/share/bash-completion/completions/goinit\n\
            \x20 goinit completions zsh  > ~/.zfunc/_goinit\n\
            \x20 goinit completions fish > ~/.config/fish/completions/goinit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the goinit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goinit config list\n\
            \x20 goinit config get service.base_url\n\
            \x20 goinit config path"
    )]
    Config(ConfigCommands),
}

// ── selection ─────────────────────────────────────────────────────────────────

/// Project selection flags shared by `preview` and `generate`.
///
/// Type, framework, and version are parsed by the domain layer so that an
/// unknown value produces the same error (and suggestions) everywhere.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Project type.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "microservice",
        help = "Project type (microservice, cli-app, api-server, simple)"
    )]
    pub project_type: String,

    /// Framework. Defaults to the recommended framework for the type.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Framework (e.g. golly, gin, cobra)"
    )]
    pub framework: Option<String>,

    /// Go version. Defaults to the latest the service supports.
    #[arg(
        short = 'g',
        long = "go-version",
        value_name = "VERSION",
        help = "Go version (e.g. 1.22.0)"
    )]
    pub go_version: Option<String>,

    /// Go module path.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        default_value = "",
        help = "Go module path (e.g. github.com/user/project)"
    )]
    pub module_name: String,

    /// Project name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = "",
        help = "Project name"
    )]
    pub name: String,

    /// Project description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        default_value = "",
        help = "Project description"
    )]
    pub description: String,

    /// Skip the metadata fetch and use built-in compatibility data.
    #[arg(long = "offline", help = "Use built-in compatibility data")]
    pub offline: bool,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `goinit preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Only list files whose path contains this substring.
    #[arg(
        long = "filter",
        value_name = "SUBSTRING",
        help = "Filter the file list (case-insensitive)"
    )]
    pub filter: Option<String>,

    /// Print the content of one file instead of the list.
    #[arg(
        long = "show",
        value_name = "PATH",
        help = "Print the content of one generated file"
    )]
    pub show: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `goinit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Directory to save the archive into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

// ── meta ──────────────────────────────────────────────────────────────────────

/// Arguments for `goinit meta`.
#[derive(Debug, Args)]
pub struct MetaArgs {}

// ── templates ─────────────────────────────────────────────────────────────────

/// Subcommands for `goinit templates`.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommands {
    /// Show the service's template catalog.
    Catalog,
    /// Show file counts for one type/framework pair.
    Stats {
        /// Project type.
        #[arg(
            short = 't',
            long = "type",
            value_name = "TYPE",
            default_value = "microservice"
        )]
        project_type: String,
        /// Framework.
        #[arg(short = 'f', long = "framework", value_name = "FRAMEWORK")]
        framework: Option<String>,
    },
}

// ── interactive ───────────────────────────────────────────────────────────────

/// Arguments for `goinit interactive`.
#[cfg(feature = "interactive")]
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Directory to save the archive into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goinit completions`.
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

/// Subcommands for `goinit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `service.base_url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
