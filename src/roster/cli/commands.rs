//! # CLI Layer
//!
//! One possible UI client for roster. This layer is the only place that:
//! - Knows about stdin/stdout/stderr
//! - Parses arguments
//! - Asks the user questions
//! - Formats output for humans
//!
//! `run()` parses arguments, sets up logging and the context, then hands off
//! to a `handle_*` function. Interactive use goes through [`Session`].

use super::render::{render_list, render_messages, render_text_list};
use super::session::{Session, SessionSettings};
use super::setup::{Cli, Commands};
use clap::Parser;
use roster::api::ConfigAction;
use roster::error::Result;
use roster::init::{initialize, resolve_config_dir, RosterContext};
use roster::logging::init_logging;
use roster::store::DataStore;
use roster::view::SearchQuery;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let ctx = initialize(config_dir, !cli.no_seed)?;

    match cli.command {
        Some(Commands::Shell) | None => handle_shell(ctx, cli.yes),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_shell(ctx: RosterContext, assume_yes: bool) -> Result<()> {
    let settings = SessionSettings {
        confirm_remove: ctx.config.confirm_remove && !assume_yes,
        name_width: ctx.config.name_width,
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(ctx.api, settings, stdin.lock(), stdout.lock());
    session.run()
}

fn handle_list(ctx: &RosterContext, search: Option<String>) -> Result<()> {
    let term = search.unwrap_or_default();
    let result = ctx.api.search_records(&term)?;
    let output = render_list(
        &result.listed_records,
        &SearchQuery::new(&term),
        ctx.api.store().len(),
        ctx.config.name_width,
    );
    print!("{}", output);
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_config(ctx: &RosterContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();
    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
