//! marquee-cli: admin client for the Marquee content API.
//!
//! Editing is stage-then-publish: `pull` snapshots the published document
//! into a local draft file, the editing commands mutate that draft, and
//! `publish` posts the whole document back.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod draft;
mod handlers;
mod print;

use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, Ctx};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let Cli {
        server,
        secret,
        draft,
        command,
    } = Cli::parse();

    let ctx = || -> Result<Ctx, CliError> {
        let server = server.as_deref().ok_or(CliError::MissingServer)?;
        Ctx::new(server, secret.clone())
    };

    match command {
        Commands::Login { password } => handlers::login(&ctx()?, &password).await,
        Commands::Pull => handlers::pull(&ctx()?, &draft).await,
        Commands::Status => handlers::status(&draft).await,
        Commands::Posts(cmd) => handlers::posts(&draft, cmd.action).await,
        Commands::Ads(cmd) => handlers::ads(&draft, cmd.action).await,
        Commands::Site(cmd) => handlers::site(&draft, cmd.action).await,
        Commands::Publish => handlers::publish(&ctx()?, &draft).await,
        Commands::Discard => handlers::discard(&draft).await,
    }
}
