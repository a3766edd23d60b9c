//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use skelly_core::domain::{ArchitectureKind, BackendStack, FrontendStack};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skelly",
    bin_name = "skelly",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project skeletons from composable strategies",
    long_about = "Skelly composes an architecture, a backend stack and an optional \
                  frontend into a project skeleton: folders, manifests and, \
                  optionally, installed dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 skelly new shop --backend express --arch layered\n\
        \x20 skelly new billing --backend java --arch hexagonal --frontend react\n\
        \x20 skelly list libraries\n\
        \x20 skelly completions bash > /usr/share/bash-completion/completions/skelly",
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
    /// Create a new project skeleton.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 skelly new shop    --backend express --backend-lib helmet --backend-lib cors\n\
            \x20 skelly new billing --backend java --arch hexagonal --dry-run\n\
            \x20 skelly new tools   --backend django --arch custom --folders apps/core,apps/api"
    )]
    New(NewArgs),

    /// List the strategy catalog.
    #[command(
        visible_alias = "ls",
        about = "List stacks, architectures and libraries",
        after_help = "EXAMPLES:\n\
            \x20 skelly list\n\
            \x20 skelly list libraries --format json"
    )]
    List(ListArgs),

    /// Initialise a Skelly configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 skelly init           # platform config directory\n\
            \x20 skelly init --local   # .skelly.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skelly completions bash > ~/.local/share/bash-completion/completions/skelly\n\
            \x20 skelly completions zsh  > ~/.zfunc/_skelly\n\
            \x20 skelly completions fish > ~/.config/fish/completions/skelly.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Skelly configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 skelly config get defaults.backend\n\
            \x20 skelly config list\n\
            \x20 skelly config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `skelly new`.
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Project name. The project is created at `<output>/<name>`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        short = 'b',
        long = "backend",
        value_name = "STACK",
        value_enum,
        help = "Backend stack (falls back to defaults.backend)"
    )]
    pub backend: Option<BackendArg>,

    #[arg(
        short = 'f',
        long = "frontend",
        value_name = "STACK",
        value_enum,
        help = "Frontend stack (default: none)"
    )]
    pub frontend: Option<FrontendArg>,

    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        value_enum,
        help = "Architecture pattern (default: layered)"
    )]
    pub architecture: Option<ArchitectureArg>,

    /// Folders for `--arch custom`, relative to the project root.
    #[arg(
        long = "folders",
        value_name = "PATHS",
        value_delimiter = ',',
        help = "Comma-separated folders for the custom architecture"
    )]
    pub folders: Vec<String>,

    /// Extra frontend packages. An entry may name several packages
    /// separated by spaces.
    #[arg(long = "frontend-lib", value_name = "PACKAGE", help = "Add a frontend library")]
    pub frontend_libs: Vec<String>,

    #[arg(long = "backend-lib", value_name = "PACKAGE", help = "Add a backend library")]
    pub backend_libs: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory of template overrides"
    )]
    pub templates: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[arg(long = "skip-install", help = "Do not run package managers")]
    pub skip_install: bool,

    /// Treat any recorded build issue as a failure.
    #[arg(long = "strict", help = "Exit non-zero if any stage failed")]
    pub strict: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `skelly list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Section to show. Shows everything when omitted.
    #[arg(value_enum, help = "What to list")]
    pub topic: Option<ListTopic>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTopic {
    Stacks,
    Architectures,
    Libraries,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `skelly init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.skelly.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skelly completions`.
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

/// Subcommands for `skelly config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Spring Boot on Maven. Also accepted as `spring`.
    #[value(alias = "spring")]
    Java,
    Express,
    Django,
}

impl From<BackendArg> for BackendStack {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Java => Self::Java,
            BackendArg::Express => Self::Express,
            BackendArg::Django => Self::Django,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontendArg {
    React,
    Lit,
    Angular,
    None,
}

impl From<FrontendArg> for FrontendStack {
    fn from(arg: FrontendArg) -> Self {
        match arg {
            FrontendArg::React => Self::React,
            FrontendArg::Lit => Self::Lit,
            FrontendArg::Angular => Self::Angular,
            FrontendArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArchitectureArg {
    /// Ports and adapters. Also accepted as `hex`.
    #[value(alias = "hex")]
    Hexagonal,
    Layered,
    Custom,
}

impl From<ArchitectureArg> for ArchitectureKind {
    fn from(arg: ArchitectureArg) -> Self {
        match arg {
            ArchitectureArg::Hexagonal => Self::Hexagonal,
            ArchitectureArg::Layered => Self::Layered,
            ArchitectureArg::Custom => Self::Custom,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
