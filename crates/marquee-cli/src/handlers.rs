//! Command handlers: each loads the draft, applies the edit, writes it back.

#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;

use crate::args::{AdsCmd, PostsCmd, SiteCmd};
use crate::client::{CliError, Ctx};
use crate::draft::{self, PostFields};
use crate::print;

pub async fn login(ctx: &Ctx, password: &str) -> Result<(), CliError> {
    if ctx.login(password).await? {
        println!("login ok");
        Ok(())
    } else {
        Err(CliError::InvalidInput("password rejected".into()))
    }
}

pub async fn pull(ctx: &Ctx, draft_path: &Path) -> Result<(), CliError> {
    let document = ctx.pull().await?;
    draft::save(draft_path, &document).await?;
    println!(
        "pulled {} entries into {}",
        document.movies.len(),
        draft_path.display()
    );
    Ok(())
}

pub async fn status(draft_path: &Path) -> Result<(), CliError> {
    let document = draft::load(draft_path).await?;
    print::status(&document);
    Ok(())
}

pub async fn posts(draft_path: &Path, action: PostsCmd) -> Result<(), CliError> {
    let mut document = draft::load(draft_path).await?;

    match action {
        PostsCmd::List { search } => {
            let needle = search.unwrap_or_default().to_lowercase();
            let hits: Vec<_> = document
                .movies
                .iter()
                .filter(|record| record.title.to_lowercase().contains(&needle))
                .collect();
            print::entries(&hits);
            return Ok(());
        }
        PostsCmd::Add {
            title,
            slug,
            year,
            genres,
            cast,
            director,
            poster_url,
            description,
            trailer_url,
            download_url,
            watch_url,
        } => {
            let added = draft::add_post(
                &mut document,
                PostFields {
                    title: Some(title),
                    slug,
                    year,
                    genres,
                    cast,
                    director,
                    poster_url,
                    description,
                    trailer_url,
                    download_url,
                    watch_url,
                },
            )?;
            print::entry_line(added);
        }
        PostsCmd::Update {
            id,
            title,
            slug,
            year,
            genres,
            cast,
            director,
            poster_url,
            description,
            trailer_url,
            download_url,
            watch_url,
        } => {
            let updated = draft::update_post(
                &mut document,
                &id,
                PostFields {
                    title,
                    slug,
                    year,
                    genres,
                    cast,
                    director,
                    poster_url,
                    description,
                    trailer_url,
                    download_url,
                    watch_url,
                },
            )?;
            print::entry_line(updated);
        }
        PostsCmd::Toggle { id } => {
            let active = draft::toggle_post(&mut document, &id)?;
            println!("{id} is now {}", if active { "active" } else { "hidden" });
        }
        PostsCmd::Delete { id } => {
            draft::delete_post(&mut document, &id)?;
            println!("{id} removed from draft");
        }
    }

    draft::save(draft_path, &document).await
}

pub async fn ads(draft_path: &Path, action: AdsCmd) -> Result<(), CliError> {
    let mut document = draft::load(draft_path).await?;

    match action {
        AdsCmd::Master { enabled } => {
            document.settings.ads_enabled = enabled;
            println!("master switch {}", if enabled { "on" } else { "off" });
        }
        AdsCmd::Set {
            placement,
            code,
            code_file,
        } => {
            let code = match (code, code_file) {
                (Some(code), None) => code,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
                _ => return Err(CliError::InvalidInput("provide --code or --code-file".into())),
            };
            draft::slot_mut(&mut document, &placement)?.code = code;
            println!("{placement} code staged");
        }
        AdsCmd::Toggle { placement } => {
            let slot = draft::slot_mut(&mut document, &placement)?;
            slot.active = !slot.active;
            println!(
                "{placement} {}",
                if slot.active { "enabled" } else { "disabled" }
            );
        }
        AdsCmd::List => {
            print::slots(&document);
            return Ok(());
        }
    }

    draft::save(draft_path, &document).await
}

pub async fn site(draft_path: &Path, action: SiteCmd) -> Result<(), CliError> {
    let mut document = draft::load(draft_path).await?;

    match action {
        SiteCmd::Set {
            header_title,
            header_message,
            header_code,
            updates_ticker,
            hero_title,
            hero_subtitle,
            footer_main_text,
            footer_about_text,
            footer_disclaimer,
            site_title,
            site_description,
            site_keywords,
            og_image,
            favicon_url,
            accent_color,
            show_related_movies,
        } => {
            let site = &mut document.settings.site;
            if let Some(value) = header_title {
                site.header_title = value;
            }
            if let Some(value) = header_message {
                site.header_message = value;
            }
            if let Some(value) = header_code {
                site.header_code = Some(value);
            }
            if let Some(value) = updates_ticker {
                site.updates_ticker = Some(value);
            }
            if let Some(value) = hero_title {
                site.hero_title = value;
            }
            if let Some(value) = hero_subtitle {
                site.hero_subtitle = value;
            }
            if let Some(value) = footer_main_text {
                site.footer_main_text = value;
            }
            if let Some(value) = footer_about_text {
                site.footer_about_text = value;
            }
            if let Some(value) = footer_disclaimer {
                site.footer_disclaimer = value;
            }
            if let Some(value) = site_title {
                site.site_title = value;
            }
            if let Some(value) = site_description {
                site.site_description = value;
            }
            if let Some(value) = site_keywords {
                site.site_keywords = value;
            }
            if let Some(value) = og_image {
                site.og_image = value;
            }
            if let Some(value) = favicon_url {
                site.favicon_url = value;
            }
            if let Some(value) = accent_color {
                site.accent_color = value;
            }
            if let Some(value) = show_related_movies {
                site.show_related_movies = value;
            }
            println!("site fields staged");
        }
        SiteCmd::Reset { yes } => {
            if !yes {
                return Err(CliError::InvalidInput(
                    "settings reset is destructive; pass --yes to confirm".into(),
                ));
            }
            draft::reset_settings(&mut document);
            println!("settings reset to defaults (catalog preserved)");
        }
    }

    draft::save(draft_path, &document).await
}

pub async fn publish(ctx: &Ctx, draft_path: &Path) -> Result<(), CliError> {
    let document = draft::load(draft_path).await?;
    ctx.publish(&document).await?;
    println!("draft published ({} entries)", document.movies.len());
    Ok(())
}

pub async fn discard(draft_path: &Path) -> Result<(), CliError> {
    match tokio::fs::remove_file(draft_path).await {
        Ok(()) => {
            println!("draft discarded");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            println!("no draft to discard");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
