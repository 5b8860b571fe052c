//! Data models for Readify
//!
//! Catalog records (`Book` and its enumerations) and the small records
//! persisted per user: reading list entries, progress, streak and feedback.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ReadifyError;

/// Genre tag of a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Fantasy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
    Manga,
    Mystery,
    Romance,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Crime,
        Genre::Manga,
        Genre::Mystery,
        Genre::Romance,
    ];

    /// Display label, as used by the genre selectors
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "Sci-Fi",
            Genre::Crime => "Crime",
            Genre::Manga => "Manga",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = ReadifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReadifyError::invalid(format!("Unknown genre: {}", s)))
    }
}

/// Rough reading length of a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn label(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Medium
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Length {
    type Err = ReadifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Length::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReadifyError::invalid(format!("Unknown length: {}", s)))
    }
}

/// A selector value: either "All" or one specific tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selector
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr<Err = ReadifyError>> FromStr for Selection<T> {
    type Err = ReadifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// A reader review shown on a book's detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub reviewer: String,
    /// Rating as displayed, e.g. "5/5"
    pub rating: String,
    pub comment: String,
}

/// A catalog record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique, stable identifier
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    /// Books listed without a length count as medium
    #[serde(default)]
    pub length: Length,
    /// Cover image asset
    pub cover: String,
    pub synopsis: String,
    /// Related titles, e.g. "Sequel: The Sea of Monsters"
    pub series: Vec<String>,
    pub reviews: Vec<Review>,
}

impl Book {
    /// Case-insensitive substring match against title or author
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
    }
}

/// A book saved to the user's reading list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingListEntry {
    pub id: u32,
    pub title: String,
    pub author: String,
}

impl From<&Book> for ReadingListEntry {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// The single saved reading-progress slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub total: u32,
    pub read: u32,
    pub per_day: u32,
    pub pct: f64,
}

impl ProgressRecord {
    /// One-line description of the saved progress
    pub fn summary(&self) -> String {
        format!(
            "Total {}, Read {}, Speed {}/day ({}%)",
            self.total,
            self.read,
            self.per_day,
            self.pct.round()
        )
    }
}

/// Consecutive-day visit counter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakRecord {
    /// Calendar date of the last counted visit
    pub last: NaiveDate,
    pub count: u32,
}

/// A submitted feedback message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Local time of submission
    pub time: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parse() {
        assert_eq!("Fantasy".parse::<Genre>().unwrap(), Genre::Fantasy);
        assert_eq!("sci-fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!(" Manga ".parse::<Genre>().unwrap(), Genre::Manga);
        assert!(matches!(
            "Horror".parse::<Genre>(),
            Err(ReadifyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_genre_serialization() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"Sci-Fi\"");
        let g: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(g, Genre::SciFi);
    }

    #[test]
    fn test_length_parse_and_default() {
        assert_eq!("long".parse::<Length>().unwrap(), Length::Long);
        assert!("Epic".parse::<Length>().is_err());
        assert_eq!(Length::default(), Length::Medium);
    }

    #[test]
    fn test_book_without_length_is_medium() {
        let json = r#"{
            "id": 42,
            "title": "Untitled",
            "author": "Anon",
            "genre": "Mystery",
            "cover": "cover.png",
            "synopsis": "",
            "series": [],
            "reviews": []
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.length, Length::Medium);
        assert_eq!(book.genre, Genre::Mystery);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("All".parse::<Selection<Genre>>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection<Genre>>().unwrap(), Selection::All);
        assert_eq!(
            "Crime".parse::<Selection<Genre>>().unwrap(),
            Selection::Only(Genre::Crime)
        );
        assert!("Nope".parse::<Selection<Length>>().is_err());
    }

    #[test]
    fn test_selection_matches() {
        assert!(Selection::All.matches(&Genre::Romance));
        assert!(Selection::Only(Genre::Romance).matches(&Genre::Romance));
        assert!(!Selection::Only(Genre::Romance).matches(&Genre::Crime));
        assert_eq!(Selection::Only(Length::Short).to_string(), "Short");
        assert_eq!(Selection::<Length>::All.to_string(), "All");
    }

    #[test]
    fn test_progress_record_wire_format() {
        let record = ProgressRecord {
            total: 300,
            read: 150,
            per_day: 25,
            pct: 50.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"perDay\":25"));

        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(record.summary(), "Total 300, Read 150, Speed 25/day (50%)");
    }

    #[test]
    fn test_streak_record_wire_format() {
        let record: StreakRecord =
            serde_json::from_str(r#"{"last":"2026-10-18","count":3}"#).unwrap();
        assert_eq!(record.last, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(record.count, 3);
    }
}
