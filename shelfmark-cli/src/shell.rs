//! The interactive menu loop driving a catalog store
//!
//! The loop reads one line per prompt and never terminates on a failed
//! operation; store errors are printed and the menu comes back. It is written
//! against generic reader/writer handles so scripted sessions can run in
//! tests without a terminal.

use anyhow::Result;
use shelfmark_core::{CatalogStore, Year, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\n1. Add book\n2. Remove book\n3. Search\n4. List all books\n5. Update status\n6. Exit";

/// Run the numbered-menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "Choose an action: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_book(store, &mut input, &mut output)?,
            "2" => remove_book(store, &mut input, &mut output)?,
            "3" => search_books(store, &mut input, &mut output)?,
            "4" => list_books(store, &mut output)?,
            "5" => update_status(store, &mut input, &mut output)?,
            "6" => {
                writeln!(output, "Goodbye.")?;
                break;
            }
            _ => writeln!(output, "Invalid choice, try again.")?,
        }
    }
    Ok(())
}

/// Print `text`, then read one line; `None` means input ended
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read an id; a non-numeric line prints an error and yields `None`
fn prompt_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u64>> {
    let Some(raw) = prompt(input, output, "Enter the book ID: ")? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "'{}' is not a valid ID.", raw)?;
            Ok(None)
        }
    }
}

/// A year that parses as an integer is kept numeric so it round-trips as a
/// JSON number; anything else is stored as the text typed.
fn parse_year(raw: String) -> Year {
    match raw.parse::<i64>() {
        Ok(n) => Year::Number(n),
        Err(_) => Year::Text(raw),
    }
}

fn add_book<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(title) = prompt(input, output, "Enter the book title: ")? else {
        return Ok(());
    };
    if title.is_empty() {
        writeln!(output, "Title must not be empty.")?;
        return Ok(());
    }
    let Some(author) = prompt(input, output, "Enter the author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt(input, output, "Enter the publication year: ")? else {
        return Ok(());
    };

    match store.add(title.as_str(), author, parse_year(year)) {
        Ok(id) => {
            debug!(id, "book added");
            writeln!(output, "Added '{}' with ID {}.", title, id)?;
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    Ok(())
}

fn remove_book<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_id(input, output)? else {
        return Ok(());
    };

    match store.remove(id) {
        Ok(book) => {
            debug!(id, "book removed");
            writeln!(output, "Removed '{}' (ID {}).", book.title, book.id)?;
        }
        Err(e) => writeln!(output, "{}", e)?,
    }
    Ok(())
}

fn search_books<R: BufRead, W: Write>(
    store: &CatalogStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(query) = prompt(input, output, "Enter a title, author, or year: ")? else {
        return Ok(());
    };

    let results = store.search(&query);
    if results.is_empty() {
        writeln!(output, "No books found.")?;
    } else {
        for book in results {
            writeln!(output, "{}", book)?;
        }
    }
    Ok(())
}

fn list_books<W: Write>(store: &CatalogStore, output: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(output, "The catalog is empty.")?;
        return Ok(());
    }
    for book in store.books() {
        writeln!(output, "{}", book)?;
    }
    Ok(())
}

fn update_status<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_id(input, output)? else {
        return Ok(());
    };
    let status_prompt = format!(
        "Enter the new status ('{}' or '{}'): ",
        STATUS_AVAILABLE, STATUS_CHECKED_OUT
    );
    let Some(new_status) = prompt(input, output, &status_prompt)? else {
        return Ok(());
    };

    match store.update_status(id, new_status.as_str()) {
        Ok(()) => {
            debug!(id, status = %new_status, "status updated");
            writeln!(output, "Status of book ID {} set to '{}'.", id, new_status)?;
        }
        Err(e) => writeln!(output, "{}", e)?,
    }
    Ok(())
}
