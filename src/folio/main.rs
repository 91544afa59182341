use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use folio::config::FolioConfig;
use folio::error::Result;
use folio::page::{compose, ReaderPage, NO_COMMENTS_PLACEHOLDER};
use folio::session::ReaderSession;
use folio::source::fs::FileSource;
use folio::source::http::HttpSource;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

/// The one user-facing load failure message. Everything else about a failed
/// fetch goes to the log, not the screen.
const LOAD_ERROR_MESSAGE: &str =
    "Sorry, we couldn't load the book. Please check the catalog location and try again.";

const PROMPT_HELP: &str =
    "commands: <id> | chapter <id> | book <id> | like | comment <user> <text> | help | quit";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config_dir();
    let config = FolioConfig::load(&config_dir).unwrap_or_default();
    let catalog = cli.catalog.clone().unwrap_or_else(|| config.catalog.clone());

    match cli.command {
        Some(Commands::Show { book, chapter }) => handle_show(&catalog, book, chapter),
        Some(Commands::Toc { book }) => handle_toc(&catalog, book),
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
        Some(Commands::Read { book, chapter }) => handle_read(&catalog, book, chapter),
        None => handle_read(&catalog, None, None),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn config_dir() -> PathBuf {
    // Override for tests and scripting
    if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "folio", "folio").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

/// Opens the session, surfacing any load failure as the fixed message in the
/// content area. The underlying cause only goes to the log and the exit code.
fn open_session(catalog: &str, book: Option<u32>, chapter: Option<u32>) -> Result<ReaderSession> {
    let session = if catalog.starts_with("http://") || catalog.starts_with("https://") {
        ReaderSession::open(&HttpSource::new(catalog), book, chapter)
    } else {
        ReaderSession::open(&FileSource::new(catalog), book, chapter)
    };

    session.map_err(|e| {
        log::error!("could not load catalog {}: {}", catalog, e);
        println!("{}", LOAD_ERROR_MESSAGE);
        e
    })
}

fn handle_show(catalog: &str, book: Option<u32>, chapter: Option<u32>) -> Result<()> {
    let session = open_session(catalog, book, chapter)?;
    print_page(&compose(&session)?);
    Ok(())
}

fn handle_toc(catalog: &str, book: Option<u32>) -> Result<()> {
    let session = open_session(catalog, book, None)?;
    let book = session.current_book();

    println!("{} {}", book.title.bold(), format!("by {}", book.author).dimmed());
    for chapter in &book.chapters {
        println!("  {}. {}", chapter.id, chapter.title);
    }
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = FolioConfig::load(config_dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("catalog"), None) => println!("catalog = {}", config.catalog),
        (Some("catalog"), Some(v)) => {
            config.catalog = v;
            config.save(config_dir)?;
            println!("catalog = {}", config.catalog);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

enum ReadCommand {
    Chapter(u32),
    Book(u32),
    Like,
    Comment { user: String, text: String },
    Help,
    Quit,
    Noop,
}

fn parse_command(line: &str) -> ReadCommand {
    let mut words = line.split_whitespace();
    match words.next() {
        None => ReadCommand::Noop,
        Some(word) => {
            if let Ok(id) = word.parse() {
                return ReadCommand::Chapter(id);
            }
            match word {
                "chapter" | "c" => match words.next().and_then(|w| w.parse().ok()) {
                    Some(id) => ReadCommand::Chapter(id),
                    None => ReadCommand::Help,
                },
                "book" | "b" => match words.next().and_then(|w| w.parse().ok()) {
                    Some(id) => ReadCommand::Book(id),
                    None => ReadCommand::Help,
                },
                "like" | "l" => ReadCommand::Like,
                // Empty user and text are accepted, matching the comment form.
                "comment" => ReadCommand::Comment {
                    user: words.next().unwrap_or_default().to_string(),
                    text: words.collect::<Vec<_>>().join(" "),
                },
                "quit" | "q" | "exit" => ReadCommand::Quit,
                _ => ReadCommand::Help,
            }
        }
    }
}

fn handle_read(catalog: &str, book: Option<u32>, chapter: Option<u32>) -> Result<()> {
    let mut session = open_session(catalog, book, chapter)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_page(&compose(&session)?);
        println!("{}", PROMPT_HELP.dimmed());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        match parse_command(&line) {
            ReadCommand::Chapter(id) => {
                // Unknown ids are a silent no-op; the page simply re-renders.
                session.select_chapter(session.current_book().id, id);
            }
            ReadCommand::Book(id) => {
                let first_chapter = session
                    .library()
                    .book(id)
                    .and_then(|b| b.first_chapter())
                    .map(|c| c.id);
                if let Some(chapter_id) = first_chapter {
                    session.select_chapter(id, chapter_id);
                }
            }
            ReadCommand::Like => session.toggle_like(),
            ReadCommand::Comment { user, text } => session.submit_comment(&user, &text),
            ReadCommand::Help | ReadCommand::Noop => {}
            ReadCommand::Quit => break,
        }
    }

    Ok(())
}

const RULE_WIDTH_MAX: usize = 72;

fn print_page(page: &ReaderPage) {
    println!();
    println!("{}", page.sidebar.title.bold());
    println!("{}", page.sidebar.byline.dimmed());
    println!("{}", format!("cover: {}", page.sidebar.cover).dimmed());
    println!();

    for entry in &page.nav {
        let label = format!("{}. {}", entry.chapter_id, entry.title);
        if entry.active {
            println!("  {} {}", "›".yellow(), label.yellow());
        } else {
            println!("    {}", label);
        }
    }
    println!();

    println!("{}", page.chapter_title.bold());
    println!("{}", "─".repeat(rule_width(&page.chapter_title)));
    println!("{}", page.body);
    println!();

    let heart = if page.liked { "♥".red() } else { "♥".dimmed() };
    println!("{} {}", heart, page.like_count);
    println!();

    println!("{}", "Comments".bold());
    if page.comments.is_empty() {
        println!("{}", NO_COMMENTS_PLACEHOLDER.dimmed());
    } else {
        for comment in &page.comments {
            println!("{}: {}", comment.user.bold(), comment.text);
        }
    }
    println!();

    println!("{}", format!("share: {}", page.share.tweet).dimmed());
    println!("{}", format!("share: {}", page.share.facebook).dimmed());
}

fn rule_width(title: &str) -> usize {
    title.width().clamp(8, RULE_WIDTH_MAX)
}
