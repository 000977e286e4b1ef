//! Interactive menu frontend for the bookstore catalog.
//!
//! Thin I/O glue over [`bookstore_sqlite::Catalog`]: a numbered menu loop
//! that prompts for the fields each store operation needs and prints either
//! a confirmation or the matched records. Input-coercion failures (a
//! quantity or id that does not parse) are reported and never reach the
//! store; store errors are printed and control returns to the menu. Only an
//! initialization failure aborts the process.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bookstore_core::{Book, BookPatch};
use bookstore_sqlite::{Catalog, UpdateOutcome};
use clap::Parser;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Aligned plain-text table.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bookstore")]
#[command(about = "Interactive bookstore inventory manager")]
struct Cli {
    /// Path to the catalog database file.
    #[arg(long, default_value = "ebookstore.db")]
    db: PathBuf,
    /// Output format for search results (default: table).
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut catalog = match Catalog::open(&cli.db) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to open database {}: {e}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = catalog.initialize() {
        eprintln!("Failed to initialize catalog: {e}");
        return ExitCode::FAILURE;
    }
    match catalog.status() {
        Ok(status) => println!("Catalog ready: {} books on file.", status.book_count),
        Err(e) => {
            eprintln!("Failed to read catalog status: {e}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_menu(&mut catalog, cli.format, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the menu loop until the operator exits or input ends.
///
/// Generic over reader and writer so tests can drive it with in-memory
/// buffers. Store errors are reported to `out` and the loop continues.
fn run_menu<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    format: OutputFormat,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(
        out,
        "\n*** Welcome to the Bookstore Database Management System! ***"
    )?;

    loop {
        writeln!(out, "\nMenu:")?;
        writeln!(out, "1. Enter book")?;
        writeln!(out, "2. Update book")?;
        writeln!(out, "3. Delete book")?;
        writeln!(out, "4. Search books")?;
        writeln!(out, "0. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "\nEnter your choice: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add_book(catalog, &mut input, &mut out),
            "2" => update_book(catalog, &mut input, &mut out),
            "3" => delete_book(catalog, &mut input, &mut out),
            "4" => search_books(catalog, format, &mut input, &mut out),
            "0" => break,
            _ => {
                writeln!(out, "Invalid choice. Please enter a valid option.")?;
                continue;
            }
        };

        if let Err(e) = result? {
            writeln!(out, "Error: {e}")?;
        }
    }

    Ok(())
}

/// Outcome of one menu action: `Ok` when handled (including soft outcomes
/// and input errors already reported), `Err` carrying a store error to
/// print. The outer `io::Result` is for the terminal itself.
type ActionResult = io::Result<Result<(), bookstore_sqlite::CatalogError>>;

fn add_book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let Some(title) = prompt(input, out, "Enter book title: ")? else {
        return Ok(Ok(()));
    };
    let Some(author) = prompt(input, out, "Enter book author: ")? else {
        return Ok(Ok(()));
    };
    let Some(raw) = prompt(input, out, "Enter quantity: ")? else {
        return Ok(Ok(()));
    };

    // Coercion failures are caller-side; the store never sees them.
    let quantity: u32 = match raw.trim().parse() {
        Ok(q) => q,
        Err(_) => {
            writeln!(out, "Invalid quantity '{raw}': expected a whole number.")?;
            return Ok(Ok(()));
        }
    };

    match catalog.insert(&title, &author, quantity) {
        Ok(book) => {
            writeln!(out, "Book added successfully! (id {})", book.id)?;
            Ok(Ok(()))
        }
        Err(e) => Ok(Err(e)),
    }
}

fn update_book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let Some(id) = prompt_id(input, out, "Enter the ID of the book to update: ")? else {
        return Ok(Ok(()));
    };

    let Some(title) = prompt(input, out, "Enter new title (press Enter to skip): ")? else {
        return Ok(Ok(()));
    };
    let Some(author) = prompt(input, out, "Enter new author (press Enter to skip): ")? else {
        return Ok(Ok(()));
    };
    let Some(raw_quantity) = prompt(input, out, "Enter new quantity (press Enter to skip): ")?
    else {
        return Ok(Ok(()));
    };

    // An empty line means "leave unchanged"; anything else is a provided
    // value and must coerce.
    let mut patch = BookPatch::default();
    if !title.is_empty() {
        patch = patch.with_title(&title);
    }
    if !author.is_empty() {
        patch = patch.with_author(&author);
    }
    if !raw_quantity.is_empty() {
        match raw_quantity.trim().parse() {
            Ok(q) => patch = patch.with_quantity(q),
            Err(_) => {
                writeln!(
                    out,
                    "Invalid quantity '{raw_quantity}': expected a whole number."
                )?;
                return Ok(Ok(()));
            }
        }
    }

    match catalog.update(id, &patch) {
        Ok(UpdateOutcome::Updated) => writeln!(out, "Book updated successfully!")?,
        Ok(UpdateOutcome::NotFound) => writeln!(out, "No book with id {id}.")?,
        Ok(UpdateOutcome::NothingToUpdate) => writeln!(out, "No values provided for update.")?,
        Err(e) => return Ok(Err(e)),
    }
    Ok(Ok(()))
}

fn delete_book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let Some(id) = prompt_id(input, out, "Enter the ID of the book to delete: ")? else {
        return Ok(Ok(()));
    };

    match catalog.delete(id) {
        Ok(true) => writeln!(out, "Book deleted successfully!")?,
        Ok(false) => writeln!(out, "No book with id {id}.")?,
        Err(e) => return Ok(Err(e)),
    }
    Ok(Ok(()))
}

fn search_books<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    format: OutputFormat,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let Some(term) = prompt(input, out, "Enter title or author to search: ")? else {
        return Ok(Ok(()));
    };

    let books = match catalog.search(&term) {
        Ok(books) => books,
        Err(e) => return Ok(Err(e)),
    };

    if books.is_empty() {
        writeln!(out, "No books found.")?;
        return Ok(Ok(()));
    }

    match format {
        OutputFormat::Table => print_table(out, &books)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&books).map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(Ok(()))
}

/// Prints records as an aligned table with a header row.
fn print_table<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    let title_width = books
        .iter()
        .map(|b| b.title.len())
        .chain(["TITLE".len()])
        .max()
        .unwrap_or(0);
    let author_width = books
        .iter()
        .map(|b| b.author.len())
        .chain(["AUTHOR".len()])
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "{:<6}  {:<title_width$}  {:<author_width$}  {:>8}",
        "ID", "TITLE", "AUTHOR", "QUANTITY"
    )?;
    for book in books {
        writeln!(
            out,
            "{:<6}  {:<title_width$}  {:<author_width$}  {:>8}",
            book.id, book.title, book.author, book.quantity
        )?;
    }
    Ok(())
}

/// Writes a prompt and reads one line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> io::Result<Option<String>> {
    write!(out, "{msg}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Prompts for an id, re-reporting coercion failures as `None`-with-message.
fn prompt_id<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> io::Result<Option<i64>> {
    let Some(raw) = prompt(input, out, msg)? else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(out, "Invalid id '{raw}': expected a whole number.")?;
            Ok(None)
        }
    }
}
