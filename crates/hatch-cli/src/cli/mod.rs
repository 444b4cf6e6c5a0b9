//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hatch_core::domain::{Driver, ServiceCategory};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "hatch",
    bin_name = "hatch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a service and wire it into your app",
    long_about = "hatch renders a service module from a template, registers it in \
                  the services index and, for ORM-backed databases, creates its model.",
    after_help = "EXAMPLES:\n\
        \x20 hatch service messages\n\
        \x20 hatch service --type database --database mongodb --name users --yes\n\
        \x20 hatch templates --format json\n\
        \x20 hatch completions bash > /usr/share/bash-completion/completions/hatch",
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

impl Cli {
    /// Directory holding the project-local `.hatch.toml`.
    pub fn project_dir(&self) -> PathBuf {
        match &self.command {
            Commands::Service(args) => args.project_dir.clone(),
            Commands::Init(args) => args.project_dir.clone(),
            _ => None,
        }
        .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new service.
    #[command(
        visible_alias = "s",
        about = "Generate a new service",
        after_help = "EXAMPLES:\n\
            \x20 hatch service messages                    # prompts for the rest\n\
            \x20 hatch service --type generic --name box --yes\n\
            \x20 hatch service --type database --database sqlite --name person --dry-run"
    )]
    Service(ServiceArgs),

    /// List available service templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 hatch templates\n\
            \x20 hatch templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Prepare a project for hatch.
    #[command(
        about = "Create .hatch.toml and the services registry",
        after_help = "EXAMPLES:\n\
            \x20 hatch init\n\
            \x20 hatch init --force   # rewrite .hatch.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hatch completions bash > ~/.local/share/bash-completion/completions/hatch\n\
            \x20 hatch completions zsh  > ~/.zfunc/_hatch\n\
            \x20 hatch completions fish > ~/.config/fish/completions/hatch.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the hatch configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hatch config get defaults.database\n\
            \x20 hatch config set layout.services_dir app/services\n\
            \x20 hatch config list"
    )]
    Config(ConfigCommands),
}

// ── service ───────────────────────────────────────────────────────────────────

/// Arguments for `hatch service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Suggested service name, offered as the default of the name prompt.
    #[arg(value_name = "NAME", help = "Default for the service name prompt")]
    pub suggested_name: Option<String>,

    /// Service type.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Service type"
    )]
    pub service_type: Option<ServiceTypeArg>,

    /// Database backing a database service.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database (ignored for generic services)"
    )]
    pub database: Option<DatabaseArg>,

    /// Service name; skips the name prompt.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Service name")]
    pub name: Option<String>,

    /// Project root (defaults to the current directory).
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        help = "Project root directory"
    )]
    pub project_dir: Option<PathBuf>,

    /// Never prompt; every unanswered question takes its default.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,

    /// Overwrite files of an existing service directory.
    #[arg(long = "force", help = "Overwrite an existing service")]
    pub force: bool,

    /// Show what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `hatch templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hatch init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project root (defaults to the current directory).
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        help = "Project root directory"
    )]
    pub project_dir: Option<PathBuf>,

    /// Overwrite an existing `.hatch.toml`.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hatch completions`.
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

/// Subcommands for `hatch config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a key in the project-local `.hatch.toml`.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the configuration file locations.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// `--type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceTypeArg {
    Generic,
    #[value(alias = "db")]
    Database,
}

impl From<ServiceTypeArg> for ServiceCategory {
    fn from(arg: ServiceTypeArg) -> Self {
        match arg {
            ServiceTypeArg::Generic => Self::Generic,
            ServiceTypeArg::Database => Self::Database,
        }
    }
}

/// `--database` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseArg {
    Memory,
    #[value(name = "mongodb", alias = "mongo")]
    MongoDb,
    #[value(name = "mysql")]
    MySql,
    #[value(name = "mariadb")]
    MariaDb,
    #[value(name = "nedb")]
    NeDb,
    #[value(alias = "postgresql")]
    Postgres,
    Sqlite,
    #[value(name = "mssql", alias = "sqlserver")]
    MsSql,
}

impl From<DatabaseArg> for Driver {
    fn from(arg: DatabaseArg) -> Self {
        match arg {
            DatabaseArg::Memory => Self::Memory,
            DatabaseArg::MongoDb => Self::MongoDb,
            DatabaseArg::MySql => Self::MySql,
            DatabaseArg::MariaDb => Self::MariaDb,
            DatabaseArg::NeDb => Self::NeDb,
            DatabaseArg::Postgres => Self::Postgres,
            DatabaseArg::Sqlite => Self::Sqlite,
            DatabaseArg::MsSql => Self::MsSql,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
