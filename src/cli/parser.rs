use crate::core::prompt::PromptLanguage;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for retroboard
#[derive(Parser, Debug)]
#[command(
    name = "retroboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A retrospective dashboard CLI: classify team feedback from a spreadsheet and generate PMO reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (internal log and fetch cache)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Read feedback from a local CSV file instead of the configured sheet
    #[arg(global = true, long = "csv", value_name = "FILE")]
    pub csv: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show metrics and the latest feedback entries
    Dashboard {
        /// Only include these category labels (repeatable). Default: all.
        #[arg(long = "category", short = 'c', value_name = "LABEL")]
        category: Vec<String>,

        #[arg(long = "recent", short = 'n', help = "Number of recent entries to show")]
        recent: Option<usize>,

        #[arg(long = "refresh", help = "Ignore the fetch cache and reload the sheet")]
        refresh: bool,
    },

    /// Generate the PMO report with the generation API
    Report {
        #[arg(long = "category", short = 'c', value_name = "LABEL")]
        category: Vec<String>,

        #[arg(long = "refresh", help = "Ignore the fetch cache and reload the sheet")]
        refresh: bool,

        #[arg(
            long = "prompt-only",
            help = "Print the assembled prompt without calling the API"
        )]
        prompt_only: bool,

        #[arg(long = "model", help = "Override the configured model")]
        model: Option<String>,

        #[arg(long = "lang", value_enum, help = "Override the configured prompt language")]
        lang: Option<PromptLanguage>,

        #[arg(long = "out", value_name = "FILE", help = "Also save the report (Markdown)")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite --out without confirmation")]
        force: bool,
    },

    /// Clear the fetch cache so the next command reloads the sheet
    Refresh,

    /// Export feedback rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "category", short = 'c', value_name = "LABEL")]
        category: Vec<String>,

        #[arg(long = "refresh", help = "Ignore the fetch cache and reload the sheet")]
        refresh: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
