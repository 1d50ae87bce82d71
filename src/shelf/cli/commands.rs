use super::menu::Menu;
use super::render::{render_config, render_messages, render_table, EMPTY_LIST};
use super::setup::{initialize_tracing, Cli, Commands, SortArg};
use clap::Parser;
use colored::control::set_override;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, ConfigAction, ShelfApi, ShelfPaths};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::library::Library;
use shelf::store::text::TextStore;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

struct AppContext {
    api: ShelfApi<TextStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    if !io::stdout().is_terminal() {
        set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
        Some(Commands::List {
            sort,
            title,
            author,
        }) => handle_list(&mut ctx, sort, title, author),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.home {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    let config = ShelfConfig::load(&config_dir)?;
    tracing::debug!(config_dir = %config_dir.display(), ?config, "configuration loaded");

    let paths = ShelfPaths::new(config_dir).with_catalog(cli.file.clone());
    let api = ShelfApi::new(TextStore::new(), paths, config);

    Ok(AppContext { api })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("org", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine config dir".to_string()))
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    // Autosave would overwrite the part of the catalog that could not be read.
    let mut keep_catalog = false;
    if ctx.api.settings().autoload {
        let path = ctx.api.catalog_path();
        if path.is_file() {
            let result = ctx.api.load_catalog(None)?;
            keep_catalog = result.has_problems();
            print!("{}", render_messages(&result.messages));
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()?;

    if ctx.api.settings().autosave {
        if keep_catalog {
            tracing::warn!("autosave skipped for partly read catalog");
            let skipped = CmdMessage::warning(format!(
                "Autosave skipped: {} was only partly read. Save explicitly to overwrite it.",
                ctx.api.catalog_path().display()
            ));
            print!("{}", render_messages(&[skipped]));
        } else {
            let result = ctx.api.save_catalog(None)?;
            print!("{}", render_messages(&result.messages));
        }
    }
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    sort: Option<SortArg>,
    title: Option<String>,
    author: Option<String>,
) -> Result<()> {
    let path = ctx.api.catalog_path();
    if !path.is_file() {
        return Err(ShelfError::Api(format!("No catalog at {}", path.display())));
    }

    let result = ctx.api.load_catalog(None)?;
    if result.has_problems() {
        eprint!("{}", render_messages(&result.messages));
    }

    if let Some(key) = sort {
        ctx.api.sort_books(key.into())?;
    }

    let books: Library = match (title, author) {
        (None, None) => ctx.api.library().clone(),
        (title, author) => {
            let by_title = title.map(|t| ctx.api.library().find_by_title(&t));
            let by_author = author.map(|a| ctx.api.library().find_by_author(&a));
            match (by_title, by_author) {
                (Some(t), Some(a)) => t.into_iter().filter(|book| a.contains(book)).collect(),
                (Some(t), None) => t.into_iter().collect(),
                (None, Some(a)) => a.into_iter().collect(),
                (None, None) => Library::new(),
            }
        }
    };

    if books.is_empty() {
        println!("{}", EMPTY_LIST);
        return Ok(());
    }
    print!("{}", render_table(books.books()));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
