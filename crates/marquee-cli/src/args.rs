//! Command-line surface for `marquee-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, builder::BoolishValueParser};

#[derive(Parser, Debug)]
#[command(name = "marquee-cli", version, about = "Marquee content API CLI", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <http://127.0.0.1:3000>
    #[arg(long, env = "MARQUEE_SERVER_URL")]
    pub server: Option<String>,

    /// Shared admin secret (env recommended over the flag to keep it out of
    /// shell history)
    #[arg(long, env = "MARQUEE_ADMIN_SECRET")]
    pub secret: Option<String>,

    /// Path of the local draft file edits are staged in
    #[arg(long, env = "MARQUEE_DRAFT_FILE", default_value = "marquee-draft.json")]
    pub draft: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a password against the server's admin secret
    Login {
        #[arg(long)]
        password: String,
    },
    /// Fetch the published document into the local draft
    Pull,
    /// Summarize the local draft
    Status,
    /// Catalog entry management (staged in the draft)
    Posts(PostsArgs),
    /// Ad slot management (staged in the draft)
    Ads(AdsArgs),
    /// Site configuration management (staged in the draft)
    Site(SiteArgs),
    /// Publish the local draft to the server
    Publish,
    /// Delete the local draft without publishing
    Discard,
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List draft entries
    List {
        /// Case-insensitive title filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Add an entry (prepended, like the admin table)
    Add {
        #[arg(long)]
        title: String,
        /// Derived from the title when omitted
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        year: Option<String>,
        /// Comma-separated genre list
        #[arg(long)]
        genres: Option<String>,
        /// Comma-separated cast list
        #[arg(long)]
        cast: Option<String>,
        #[arg(long)]
        director: Option<String>,
        #[arg(long)]
        poster_url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        trailer_url: Option<String>,
        #[arg(long)]
        download_url: Option<String>,
        #[arg(long)]
        watch_url: Option<String>,
    },
    /// Update fields of an existing entry
    Update {
        id: String,
        /// Re-derives a slug that still tracks the old title
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        genres: Option<String>,
        #[arg(long)]
        cast: Option<String>,
        #[arg(long)]
        director: Option<String>,
        #[arg(long)]
        poster_url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        trailer_url: Option<String>,
        #[arg(long)]
        download_url: Option<String>,
        #[arg(long)]
        watch_url: Option<String>,
    },
    /// Flip an entry's visibility
    Toggle { id: String },
    /// Remove an entry from the draft
    Delete { id: String },
}

#[derive(Parser, Debug)]
pub struct AdsArgs {
    #[command(subcommand)]
    pub action: AdsCmd,
}

#[derive(Subcommand, Debug)]
pub enum AdsCmd {
    /// Set the global master switch
    Master {
        #[arg(value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Replace a slot's code
    Set {
        /// Placement key, e.g. `homeTop` or `detailSidebar1`
        placement: String,
        #[arg(long, conflicts_with = "code_file")]
        code: Option<String>,
        /// Read the code from a file instead
        #[arg(long)]
        code_file: Option<PathBuf>,
    },
    /// Flip a slot's active switch
    Toggle { placement: String },
    /// Show the staged slot configuration
    List,
}

#[derive(Parser, Debug)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub action: SiteCmd,
}

#[derive(Subcommand, Debug)]
pub enum SiteCmd {
    /// Edit site configuration fields
    Set {
        #[arg(long)]
        header_title: Option<String>,
        #[arg(long)]
        header_message: Option<String>,
        #[arg(long)]
        header_code: Option<String>,
        #[arg(long)]
        updates_ticker: Option<String>,
        #[arg(long)]
        hero_title: Option<String>,
        #[arg(long)]
        hero_subtitle: Option<String>,
        #[arg(long)]
        footer_main_text: Option<String>,
        #[arg(long)]
        footer_about_text: Option<String>,
        #[arg(long)]
        footer_disclaimer: Option<String>,
        #[arg(long)]
        site_title: Option<String>,
        #[arg(long)]
        site_description: Option<String>,
        #[arg(long)]
        site_keywords: Option<String>,
        #[arg(long)]
        og_image: Option<String>,
        #[arg(long)]
        favicon_url: Option<String>,
        #[arg(long)]
        accent_color: Option<String>,
        #[arg(long, value_parser = BoolishValueParser::new())]
        show_related_movies: Option<bool>,
    },
    /// Reset site and ad settings to defaults, preserving the catalog
    Reset {
        /// Required confirmation; the reset is destructive
        #[arg(long)]
        yes: bool,
    },
}
