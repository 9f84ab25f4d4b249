//! CLI argument parsing and command definitions.
//!
//! `folio` browses a portfolio content directory the way the site's list
//! pages do (filter, search, sort, paginate), renders markdown pages, and
//! manages its own configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio_content::Collection;
use folio_core::ALL_FILTER;
use folio_query::{Layout, SortBy};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a collection with filter, search, sort, and pagination applied.
    List(ListArgs),

    /// Show the filter options available for a collection.
    Filters {
        /// Collection: projects, blog, scripts, referrals, links, docs.
        collection: Collection,
    },

    /// Read search queries from stdin and print matches as input settles.
    Search(SearchArgs),

    /// Render a markdown file to HTML on stdout.
    Render {
        /// Markdown file, with or without frontmatter.
        file: PathBuf,

        /// Print the table of contents instead of the HTML.
        #[arg(long)]
        toc: bool,
    },

    /// List skills, optionally for one group.
    Skills {
        /// Skill group to show ("All" for every group).
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Show the link-hub playlist.
    Playlist,

    /// Build a `mailto:` URL for a contact message.
    Mailto(MailtoArgs),

    /// Configuration operations.
    Config(ConfigCommand),

    /// Print version information.
    Version,
}

/// Arguments for `folio list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection: projects, blog, scripts, referrals, links, docs.
    pub collection: Collection,

    /// Tag or category to filter by.
    #[arg(short, long, default_value = ALL_FILTER)]
    pub filter: String,

    /// Case-insensitive text to search titles, descriptions, and tags for.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: date-desc, date-asc, alphabetical, price-asc, price-desc.
    #[arg(long, default_value_t = SortBy::DateDesc)]
    pub sort: SortBy,

    /// Output layout: grid or list.
    #[arg(short, long, default_value_t = Layout::Grid)]
    pub layout: Layout,

    /// Page number, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page (defaults to `listing.per_page`).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Print the page as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Collection: projects, blog, scripts, referrals, links, docs.
    pub collection: Collection,

    /// Tag or category to filter by.
    #[arg(short, long, default_value = ALL_FILTER)]
    pub filter: String,

    /// Sort order: date-desc, date-asc, alphabetical, price-asc, price-desc.
    #[arg(long, default_value_t = SortBy::DateDesc)]
    pub sort: SortBy,

    /// Print each result set as a JSON line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio mailto`.
#[derive(Args, Debug)]
pub struct MailtoArgs {
    /// Sender name.
    #[arg(long)]
    pub name: String,

    /// Sender email address.
    #[arg(long)]
    pub email: String,

    /// Subject line.
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message text.
    #[arg(long)]
    pub message: String,

    /// Recipient (defaults to `contact.recipient`).
    #[arg(long)]
    pub to: Option<String>,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "listing.per_page").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "listing.per_page").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
