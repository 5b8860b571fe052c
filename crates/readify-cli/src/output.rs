//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use readify_core::{Book, ReadingListEntry};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print any serializable value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to encode output: {}", e),
        }
    }

    /// Print a single book with its details
    pub fn print_book(&self, book: &Book) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:       {}", book.id);
                println!("Title:    {}", book.title);
                println!("Author:   {}", book.author);
                println!("Genre:    {}", book.genre);
                println!("Length:   {}", book.length);
                println!();
                println!("{}", book.synopsis);

                if !book.series.is_empty() {
                    println!();
                    println!("── Series ──");
                    for related in &book.series {
                        println!("  {}", related);
                    }
                }

                if !book.reviews.is_empty() {
                    println!();
                    println!("── Reviews ({}) ──", book.reviews.len());
                    for review in &book.reviews {
                        println!(
                            "[{}] {}: {}",
                            review.rating,
                            review.reviewer,
                            truncate(&review.comment, 60)
                        );
                    }
                }
            }
            OutputFormat::Json => self.json(book),
            OutputFormat::Quiet => println!("{}", book.id),
        }
    }

    /// Print a list of books
    pub fn print_books(&self, books: &[&Book]) {
        match self.format {
            OutputFormat::Human => {
                if books.is_empty() {
                    self.no_matches();
                    return;
                }
                for book in books {
                    println!(
                        "{:>3} | {} | {} | {}",
                        book.id,
                        truncate(&book.title, 40),
                        truncate(&book.author, 25),
                        book.genre
                    );
                }
                println!("\n{} book(s)", books.len());
            }
            OutputFormat::Json => self.json(books),
            OutputFormat::Quiet => {
                for book in books {
                    println!("{}", book.id);
                }
            }
        }
    }

    /// Print the saved reading list
    pub fn print_reading_list(&self, entries: &[ReadingListEntry]) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("Your reading list is empty.");
                    return;
                }
                for entry in entries {
                    println!("{:>3} | {} by {}", entry.id, entry.title, entry.author);
                }
                println!("\n{} book(s)", entries.len());
            }
            OutputFormat::Json => self.json(entries),
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
    }

    /// The empty-result message shared by browse and recommend
    pub fn no_matches(&self) {
        self.message("No books match your selection.");
        if self.format == OutputFormat::Human {
            println!("Try a different filter.");
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
