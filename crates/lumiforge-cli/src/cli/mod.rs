//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lumiforge",
    bin_name = "lumiforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Lumina project scaffolding",
    long_about = "Lumiforge creates new Lumina-engine game projects: directory \
                  layout, project descriptor, premake build files, C++ module \
                  boilerplate, and a copy of the engine tools.",
    after_help = "EXAMPLES:\n\
        \x20 lumiforge new \"My Game\" --dir ~/projects/my-game\n\
        \x20 lumiforge doctor\n\
        \x20 lumiforge completions bash > /usr/share/bash-completion/completions/lumiforge",
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
    /// Create a new Lumina project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 lumiforge new \"My Game\" --dir ~/projects/my-game\n\
            \x20 lumiforge new Shooter --dir . --yes"
    )]
    New(NewArgs),

    /// Verify the engine installation.
    #[command(
        about = "Check the Lumina installation this tool scaffolds from",
        after_help = "EXAMPLES:\n\
            \x20 lumiforge doctor\n\
            \x20 lumiforge doctor --engine-dir /opt/lumina"
    )]
    Doctor(DoctorArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lumiforge completions bash > ~/.local/share/bash-completion/completions/lumiforge\n\
            \x20 lumiforge completions zsh  > ~/.zfunc/_lumiforge\n\
            \x20 lumiforge completions fish > ~/.config/fish/completions/lumiforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `lumiforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Whitespace is replaced with underscores in the
    /// generated identifiers.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Directory the project is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (prompted for interactively when omitted)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── doctor ────────────────────────────────────────────────────────────────────

/// Arguments for `lumiforge doctor`.
#[derive(Debug, Args)]
pub struct DoctorArgs {}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lumiforge completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
