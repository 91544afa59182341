use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A catalog-driven book reader for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog location: a JSON file path or an http(s) URL
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read interactively (the default command)
    #[command(alias = "r")]
    Read {
        /// Book id to open (defaults to 1, falling back to the first book)
        #[arg(short, long)]
        book: Option<u32>,

        /// Chapter id to open (defaults to 1, falling back to the first chapter)
        #[arg(short = 'n', long)]
        chapter: Option<u32>,
    },

    /// Render one chapter page and exit
    #[command(alias = "s")]
    Show {
        /// Book id to render
        #[arg(short, long)]
        book: Option<u32>,

        /// Chapter id to render
        #[arg(short = 'n', long)]
        chapter: Option<u32>,
    },

    /// List the chapters of a book
    Toc {
        /// Book id to list (defaults like `read`)
        #[arg(short, long)]
        book: Option<u32>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
