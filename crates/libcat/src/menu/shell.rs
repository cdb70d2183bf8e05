use super::render::{self, write_books, write_error, write_failure, write_success};
use super::{MenuChoice, OutputFormat};
use crate::prelude::Error;
use colored::Colorize;
use libcat_core::catalog::{Catalog, SortKey};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellConfig {
    /// Skip the banner and prompts
    pub quiet: bool,
    /// Print the catalog size after every command
    pub verbose: bool,
    pub output: OutputFormat,
}

/// Menu loop driving a single [`Catalog`].
///
/// Reads one answer per line from `input` and writes prompts, status lines and
/// listings to `output`. The catalog lives as long as the shell does.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            catalog: Catalog::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.write_menu()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(choice) = MenuChoice::parse(&line) else {
                write_failure(&mut self.output, render::INVALID_CHOICE)?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            log::debug!("menu choice {} ({})", choice.number(), choice.label());

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(Error::InvalidInput(input)) => {
                    log::debug!("rejected input {input:?}");
                    write_failure(&mut self.output, render::INVALID_INPUT)?;
                }
                Err(Error::UnexpectedEof) => break,
                Err(err) => return Err(err),
            }

            if self.config.verbose {
                writeln!(
                    self.output,
                    "{}",
                    format!(
                        "[{} book(s), {} issued]",
                        self.catalog.len(),
                        self.catalog.outstanding().count()
                    )
                    .bright_black()
                )?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), Error> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::AddMultiple => {
                let count = self.prompt_count("Enter number of books to add: ")?;
                for index in 0..count {
                    match self.add_book() {
                        Ok(()) => {}
                        Err(Error::InvalidInput(input)) => {
                            let skipped = count - index - 1;
                            log::debug!("rejected input {input:?}, skipping {skipped} entries");
                            write_failure(&mut self.output, render::INVALID_INPUT)?;
                            return write_failure(
                                &mut self.output,
                                &format!("Skipped {skipped} remaining book(s)."),
                            );
                        }
                        Err(err) => return Err(err),
                    }
                }
                Ok(())
            }
            MenuChoice::SearchById => {
                let id = self.prompt_id()?;
                match self.catalog.lookup_by_id(id) {
                    Some(book) => write_books(&mut self.output, &[book], self.config.output),
                    None => write_failure(&mut self.output, render::BOOK_NOT_FOUND),
                }
            }
            MenuChoice::SearchByTitle => {
                let title = self.prompt("Enter Book Title: ")?;
                let found = self.catalog.search_by_title(&title);
                if found.is_empty() {
                    write_failure(&mut self.output, render::BOOK_NOT_FOUND)
                } else {
                    write_books(&mut self.output, &found, self.config.output)
                }
            }
            MenuChoice::Issue => {
                let id = self.prompt_id()?;
                let student = self.prompt("Enter Student Name: ")?;
                match self.catalog.issue_book(id, student) {
                    Ok(_) => write_success(&mut self.output, render::BOOK_ISSUED),
                    Err(err) => write_error(&mut self.output, &err),
                }
            }
            MenuChoice::Return => {
                let id = self.prompt_id()?;
                match self.catalog.return_book(id) {
                    Ok(_) => write_success(&mut self.output, render::BOOK_RETURNED),
                    Err(err) => write_error(&mut self.output, &err),
                }
            }
            MenuChoice::ListById => self.list(SortKey::Id),
            MenuChoice::ListByTitle => self.list(SortKey::Title),
            MenuChoice::Delete => {
                let id = self.prompt_id()?;
                match self.catalog.delete_book(id) {
                    Ok(_) => write_success(&mut self.output, render::BOOK_DELETED),
                    Err(err) => write_error(&mut self.output, &err),
                }
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_book(&mut self) -> Result<(), Error> {
        let id = self.prompt_id()?;
        let title = self.prompt("Enter Book Title: ")?;
        let author = self.prompt("Enter Book Author: ")?;

        match self.catalog.add_book(id, title, author) {
            Ok(_) => write_success(&mut self.output, render::BOOK_ADDED),
            Err(err) => write_error(&mut self.output, &err),
        }
    }

    fn list(&mut self, key: SortKey) -> Result<(), Error> {
        let books = self.catalog.list_all(key);
        if books.is_empty() && self.config.output != OutputFormat::Json {
            return write_failure(&mut self.output, render::EMPTY_CATALOG);
        }
        write_books(&mut self.output, &books, self.config.output)
    }

    fn write_menu(&mut self) -> Result<(), Error> {
        if self.config.quiet {
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", "Library Management System".bold().cyan())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;

        Ok(())
    }

    /// Next line of input without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<String, Error> {
        if !self.config.quiet {
            write!(self.output, "{label}")?;
            self.output.flush()?;
        }

        self.read_line()?.ok_or(Error::UnexpectedEof)
    }

    fn prompt_id(&mut self) -> Result<i32, Error> {
        let answer = self.prompt("Enter Book ID: ")?;
        answer
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidInput(answer))
    }

    fn prompt_count(&mut self, label: &str) -> Result<usize, Error> {
        let answer = self.prompt(label)?;
        answer
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidInput(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, output: OutputFormat) -> (String, Catalog) {
        run_with(
            script,
            ShellConfig {
                quiet: true,
                verbose: false,
                output,
            },
        )
    }

    fn run_with(script: &str, config: ShellConfig) -> (String, Catalog) {
        let mut out = Vec::new();
        let catalog = {
            let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out, config);
            shell.run().unwrap();
            shell.catalog().clone()
        };
        (String::from_utf8(out).unwrap(), catalog)
    }

    fn plain(script: &str) -> (String, Catalog) {
        run_script(script, OutputFormat::Plain)
    }

    // ============================================================================
    // add tests
    // ============================================================================

    #[test]
    fn test_add_and_duplicate() {
        let (out, catalog) = plain("1\n1\nA\nX\n1\n2\nB\nY\n1\n1\nC\nZ\n10\n");

        assert_eq!(out.matches("Book added successfully.").count(), 2);
        assert!(out.contains("Book with this ID already exists."));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_by_id(1).unwrap().title, "A");
    }

    #[test]
    fn test_add_multiple_books() {
        let (out, catalog) = plain("2\n3\n30\nC\nZ\n10\nA\nX\n20\nB\nY\n10\n");

        assert_eq!(out.matches("Book added successfully.").count(), 3);
        let ids: Vec<i32> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_add_multiple_stops_on_bad_id_and_reports_skipped() {
        let (out, catalog) = plain("2\n4\n1\nA\nX\nbad\n7\n10\n");

        assert_eq!(out.matches("Book added successfully.").count(), 1);
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Skipped 2 remaining book(s)."));
        // The menu resumes after the aborted batch.
        assert!(out.contains("Book ID: 1, Title: A, Author: X, Status: Available"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_title_keeps_inner_spaces() {
        let (_, catalog) = plain("1\n5\nThe Old Man and the Sea\nErnest Hemingway\n");
        let book = catalog.lookup_by_id(5).unwrap();
        assert_eq!(book.title, "The Old Man and the Sea");
        assert_eq!(book.author, "Ernest Hemingway");
    }

    // ============================================================================
    // search tests
    // ============================================================================

    #[test]
    fn test_search_by_id_and_title() {
        let (out, _) = plain("1\n1\nDune\nFrank Herbert\n3\n1\n3\n9\n4\nDune\n4\nEmma\n10\n");

        assert_eq!(
            out.matches("Book ID: 1, Title: Dune, Author: Frank Herbert, Status: Available")
                .count(),
            2
        );
        assert_eq!(out.matches("Book not found.").count(), 2);
    }

    // ============================================================================
    // issue / return tests
    // ============================================================================

    #[test]
    fn test_issue_and_return_scenario() {
        let script = "1\n1\nA\nX\n1\n2\nB\nY\n\
                      5\n1\nStu\n5\n1\nOther\n6\n2\n6\n1\n10\n";
        let (out, catalog) = plain(script);

        assert!(out.contains("Book issued successfully."));
        assert!(out.contains("Book is already issued."));
        assert!(out.contains("Book is not issued or was not the last issued book."));
        assert!(out.contains("Book returned successfully."));

        let book = catalog.lookup_by_id(1).unwrap();
        assert!(!book.issued);
        assert!(book.issued_to.is_empty());
    }

    #[test]
    fn test_issue_missing_book() {
        let (out, catalog) = plain("5\n4\nStu\n10\n");
        assert!(out.contains("Book not found."));
        assert_eq!(catalog.outstanding().count(), 0);
    }

    // ============================================================================
    // list / delete tests
    // ============================================================================

    #[test]
    fn test_list_by_id_and_title() {
        let (out, _) = plain("1\n2\nAlpha\nX\n1\n1\nZeta\nY\n7\n8\n10\n");

        let lines: Vec<&str> = out.lines().filter(|l| l.starts_with("Book ID")).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Book ID: 1,"));
        assert!(lines[1].starts_with("Book ID: 2,"));
        assert!(lines[2].contains("Title: Alpha"));
        assert!(lines[3].contains("Title: Zeta"));
    }

    #[test]
    fn test_list_empty_catalog() {
        let (out, _) = plain("7\n10\n");
        assert!(out.contains("No books in the catalog."));
    }

    #[test]
    fn test_delete_book() {
        let (out, catalog) = plain("1\n1\nA\nX\n9\n1\n9\n1\n10\n");

        assert!(out.contains("Book deleted successfully."));
        assert!(out.contains("Book not found."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_table_listing_shows_borrower() {
        let (out, _) = run_script(
            "1\n1\nDune\nFrank Herbert\n1\n2\nEmma\nJane Austen\n5\n1\nStu\n8\n10\n",
            OutputFormat::Table,
        );

        assert!(out.contains("Issued To"));
        assert!(out.contains("Stu"));
        let dune = out.find("Dune").unwrap();
        let emma = out.find("Emma").unwrap();
        assert!(dune < emma);
        assert!(!out.contains("Book ID:"));
    }

    #[test]
    fn test_verbose_reports_catalog_size() {
        let (out, _) = run_with(
            "1\n1\nA\nX\n5\n1\nStu\n10\n",
            ShellConfig {
                quiet: true,
                verbose: true,
                output: OutputFormat::Plain,
            },
        );

        assert!(out.contains("[1 book(s), 0 issued]"));
        assert!(out.contains("[1 book(s), 1 issued]"));
    }

    #[test]
    fn test_json_listing() {
        let (out, _) = run_script("1\n1\nDune\nFrank Herbert\n7\n10\n", OutputFormat::Json);

        let start = out.find("[\n").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(parsed[0]["title"], "Dune");
        assert_eq!(parsed[0]["issued"], false);
    }

    // ============================================================================
    // input handling tests
    // ============================================================================

    #[test]
    fn test_invalid_choice_and_input() {
        let (out, catalog) = plain("42\nhello\n1\nnot-a-number\n\n10\n");

        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert!(out.contains("Invalid input."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_exit_stops_reading() {
        let (out, catalog) = plain("10\n1\n1\nA\nX\n");
        assert!(out.is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_end_of_input_mid_command() {
        let (_, catalog) = plain("1\n1\nA\n");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_prompts_shown_when_not_quiet() {
        let mut out = Vec::new();
        let mut shell = Shell::new(
            Cursor::new("10\n".to_string()),
            &mut out,
            ShellConfig::default(),
        );
        shell.run().unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Library Management System"));
        assert!(out.contains("8. List All Books (Sorted by Title)"));
        assert!(out.contains("Enter your choice: "));
    }
}
