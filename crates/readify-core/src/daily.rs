//! Home page extras: author of the day and rotating quotes

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedAuthor {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    /// Portrait shown next to the quote
    pub photo: &'static str,
}

pub const AUTHORS: [FeaturedAuthor; 6] = [
    FeaturedAuthor {
        name: "Octavia Butler",
        description: "Pioneer of science fiction and Afrofuturism.",
    },
    FeaturedAuthor {
        name: "Haruki Murakami",
        description: "Master of surreal and introspective fiction.",
    },
    FeaturedAuthor {
        name: "Zadie Smith",
        description: "Contemporary novelist exploring identity and culture.",
    },
    FeaturedAuthor {
        name: "Chimamanda Ngozi Adichie",
        description: "Author of Half of a Yellow Sun and Americanah.",
    },
    FeaturedAuthor {
        name: "Neil Gaiman",
        description: "Writer of fantasy, comics, and modern myth.",
    },
    FeaturedAuthor {
        name: "Arundhati Roy",
        description: "Author of The God of Small Things.",
    },
];

pub const QUOTES: [Quote; 5] = [
    Quote {
        text: "So many books, so little time.",
        author: "Frank Zappa",
        photo: "https://i.pravatar.cc/300?img=11",
    },
    Quote {
        text: "A reader lives a thousand lives before he dies.",
        author: "George R.R. Martin",
        photo: "https://i.pravatar.cc/300?img=12",
    },
    Quote {
        text: "The more that you read, the more things you will know.",
        author: "Dr. Seuss",
        photo: "https://i.pravatar.cc/300?img=13",
    },
    Quote {
        text: "Books are a uniquely portable magic.",
        author: "Stephen King",
        photo: "https://i.pravatar.cc/300?img=14",
    },
    Quote {
        text: "Reading is dreaming with open eyes.",
        author: "Anissa Djefri",
        photo: "https://i.pravatar.cc/300?img=15",
    },
];

/// Featured author for `date`, keyed on the day of the month
pub fn author_of_day(date: NaiveDate) -> &'static FeaturedAuthor {
    &AUTHORS[date.day() as usize % AUTHORS.len()]
}

/// Endless cycle through [`QUOTES`], starting at the first
#[derive(Debug, Default, Clone)]
pub struct QuoteRotation {
    index: usize,
}

impl QuoteRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the rotation at an arbitrary position
    pub fn starting_at(index: usize) -> Self {
        Self {
            index: index % QUOTES.len(),
        }
    }
}

impl Iterator for QuoteRotation {
    type Item = &'static Quote;

    fn next(&mut self) -> Option<Self::Item> {
        let quote = &QUOTES[self.index];
        self.index = (self.index + 1) % QUOTES.len();
        Some(quote)
    }
}
