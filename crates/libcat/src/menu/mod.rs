mod render;
mod shell;

use crate::prelude::{eprintln, *};

pub use shell::{Shell, ShellConfig};

#[derive(Debug, Default, clap::Parser)]
#[command(name = "menu")]
#[command(about = "Run the interactive catalog menu")]
pub struct App {
    /// Suppress the banner and prompts (useful with piped input)
    #[arg(short, long, env = "LIBCAT_QUIET")]
    pub quiet: bool,

    /// Output format for listings and search results: plain, table, or json (default: plain)
    #[arg(long, env = "LIBCAT_OUTPUT", default_value = "plain")]
    pub output: OutputFormat,

    /// Output as JSON (alias for --output json)
    #[arg(long)]
    pub json: bool,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Book ID: ..., Title: ...` line per record
    #[default]
    Plain,
    /// Aligned table including the borrower column
    Table,
    /// JSON array of records
    Json,
}

/// Numbered entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMultiple,
    SearchById,
    SearchByTitle,
    Issue,
    Return,
    ListById,
    ListByTitle,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddBook,
        MenuChoice::AddMultiple,
        MenuChoice::SearchById,
        MenuChoice::SearchByTitle,
        MenuChoice::Issue,
        MenuChoice::Return,
        MenuChoice::ListById,
        MenuChoice::ListByTitle,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let number = input.trim().parse::<usize>().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::AddMultiple => "Add Multiple Books",
            MenuChoice::SearchById => "Search Book by ID",
            MenuChoice::SearchByTitle => "Search Book by Title",
            MenuChoice::Issue => "Issue Book",
            MenuChoice::Return => "Return Book",
            MenuChoice::ListById => "List All Books",
            MenuChoice::ListByTitle => "List All Books (Sorted by Title)",
            MenuChoice::Delete => "Delete Book",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Module entry point
pub fn run(app: App, global: crate::Global) -> Result<()> {
    let output = if app.json {
        OutputFormat::Json
    } else {
        app.output
    };

    if global.verbose {
        eprintln!("Starting catalog menu ({output:?} output)...");
        eprintln!();
    }

    let config = ShellConfig {
        quiet: app.quiet,
        verbose: global.verbose,
        output,
    };

    let mut shell = Shell::new(std::io::stdin().lock(), anstream::stdout(), config);
    shell.run().context("Catalog menu failed")?;

    if global.verbose {
        eprintln!("Catalog held {} book(s) at exit", shell.catalog().len());
    }

    Ok(())
}
