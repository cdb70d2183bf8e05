use super::OutputFormat;
use crate::prelude::{new_table, Error};
use colored::Colorize;
use libcat_core::catalog::Book;
use libcat_core::CatalogError;
use std::io::Write;

pub const BOOK_ADDED: &str = "Book added successfully.";
pub const BOOK_ISSUED: &str = "Book issued successfully.";
pub const BOOK_RETURNED: &str = "Book returned successfully.";
pub const BOOK_DELETED: &str = "Book deleted successfully.";
pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const INVALID_INPUT: &str = "Invalid input.";
pub const EMPTY_CATALOG: &str = "No books in the catalog.";

/// Status line shown for a failed catalog operation
pub fn error_message(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::DuplicateId(_) => "Book with this ID already exists.",
        CatalogError::NotFound(_) => BOOK_NOT_FOUND,
        CatalogError::AlreadyIssued(_) => "Book is already issued.",
        CatalogError::NotReturnable(_) => "Book is not issued or was not the last issued book.",
    }
}

pub fn write_success<W: Write>(out: &mut W, message: &str) -> Result<(), Error> {
    writeln!(out, "{}", message.green())?;
    Ok(())
}

pub fn write_failure<W: Write>(out: &mut W, message: &str) -> Result<(), Error> {
    writeln!(out, "{}", message.yellow())?;
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, err: &CatalogError) -> Result<(), Error> {
    log::debug!("catalog operation on book {} failed: {err}", err.id());
    write_failure(out, error_message(err))
}

/// Render a set of records in the requested output format.
pub fn write_books<W: Write>(
    out: &mut W,
    books: &[&Book],
    format: OutputFormat,
) -> Result<(), Error> {
    match format {
        OutputFormat::Plain => {
            for book in books {
                writeln!(out, "{book}")?;
            }
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.add_row(prettytable::row![
                "ID".bold().cyan(),
                "Title".bold().cyan(),
                "Author".bold().cyan(),
                "Status".bold().cyan(),
                "Issued To".bold().cyan()
            ]);

            for book in books {
                let status = if book.issued {
                    book.status().yellow().to_string()
                } else {
                    book.status().green().to_string()
                };
                let borrower = if book.issued_to.is_empty() {
                    "-".bright_black().to_string()
                } else {
                    book.issued_to.bright_magenta().to_string()
                };

                table.add_row(prettytable::row![
                    book.id,
                    book.title,
                    book.author,
                    status,
                    borrower
                ]);
            }

            table.print(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, books)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
