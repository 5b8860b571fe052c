//! The book catalog
//!
//! A fixed, ordered list of books populated once and never mutated.

use std::collections::HashSet;

use crate::error::{ReadifyError, Result};
use crate::models::{Book, Genre, Length, Review};

/// Read-only collection of books in declaration order
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from an explicit list
    ///
    /// Fails if two books share an id.
    pub fn new(books: Vec<Book>) -> Result<Self> {
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id) {
                return Err(ReadifyError::invalid(format!(
                    "Duplicate book id in catalog: {}",
                    book.id
                )));
            }
        }
        Ok(Self { books })
    }

    /// The catalog that ships with Readify
    pub fn builtin() -> Self {
        Self {
            books: builtin_books(),
        }
    }

    /// All books, in declaration order
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id
    pub fn find_by_id(&self, id: u32) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(ReadifyError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: u32,
    title: &str,
    author: &str,
    genre: Genre,
    length: Length,
    cover: &str,
    synopsis: &str,
    series: &[&str],
    reviews: &[(&str, &str, &str)],
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        genre,
        length,
        cover: cover.to_string(),
        synopsis: synopsis.to_string(),
        series: series.iter().map(|s| s.to_string()).collect(),
        reviews: reviews
            .iter()
            .map(|(reviewer, rating, comment)| Review {
                reviewer: reviewer.to_string(),
                rating: rating.to_string(),
                comment: comment.to_string(),
            })
            .collect(),
    }
}

fn builtin_books() -> Vec<Book> {
    vec![
        book(
            1,
            "Percy Jackson: The Lightning Thief",
            "Rick Riordan",
            Genre::Fantasy,
            Length::Medium,
            "Percy Jackson.png",
            "Twelve-year-old Percy discovers he is a demigod, son of Poseidon. He must find Zeus's stolen lightning bolt to prevent a war among the gods.",
            &["Sequel: The Sea of Monsters", "Sequel: The Titan's Curse"],
            &[
                ("Alex", "5/5", "Fun adventure, loved the Greek myths!"),
                ("Maya", "5/5", "Couldn't put it down."),
            ],
        ),
        book(
            2,
            "The Hunger Games",
            "Suzanne Collins",
            Genre::SciFi,
            Length::Medium,
            "The Hunger Games.png",
            "In a dystopian future, Katniss volunteers to take her sister's place in the Hunger Games – a televised fight to the death.",
            &["Sequel: Catching Fire", "Sequel: Mockingjay"],
            &[("Sam", "5/5", "Thrilling from start to finish.")],
        ),
        book(
            3,
            "A Good Girl's Guide to Murder",
            "Holly Jackson",
            Genre::Crime,
            Length::Medium,
            "A Girls Guide to Murder.png",
            "Pip decides to reopen a closed murder case for her school project. As she digs deeper, she uncovers secrets someone will kill to keep hidden.",
            &["Sequel: Good Girl, Bad Blood"],
            &[("Jordan", "5/5", "Best YA thriller I've read!")],
        ),
        book(
            4,
            "Death Note",
            "Tsugumi Ohba",
            Genre::Manga,
            Length::Long,
            "Death Note.png",
            "Light Yagami finds a notebook that kills anyone whose name is written in it. He decides to use it to rid the world of criminals, but a genius detective is on his trail.",
            &["Sequel: Death Note Vol. 2–12"],
            &[("Kai", "5/5", "Mind-blowing cat-and-mouse game.")],
        ),
        book(
            5,
            "One of Us Is Lying",
            "Karen M. McManus",
            Genre::Mystery,
            Length::Medium,
            "One of us is lying.png",
            "Five students enter detention. Only four leave alive. Each had a motive to kill Simon, who was about to reveal their darkest secrets.",
            &["Sequel: One of Us Is Next"],
            &[("Riley", "4/5", "Great twists, very addictive.")],
        ),
        book(
            6,
            "Six of Crows",
            "Leigh Bardugo",
            Genre::Fantasy,
            Length::Long,
            "Six of crows.png",
            "A crew of six outcasts must pull off an impossible heist – break into an ice court and rescue a prisoner who holds the key to a deadly drug.",
            &["Sequel: Crooked Kingdom"],
            &[("Luna", "5/5", "Amazing characters and plot.")],
        ),
        book(
            7,
            "My Hero Academia Vol. 1",
            "Kohei Horikoshi",
            Genre::Manga,
            Length::Short,
            "My hero academia vol 1.png",
            "In a world where most people have superpowers, Izuku Midoriya dreams of becoming a hero despite being born Quirkless. When he meets his idol, everything changes.",
            &["Sequel: My Hero Academia Vol. 2–38+"],
            &[("Zara", "5/5", "So inspiring and action-packed!")],
        ),
        book(
            8,
            "The Maze Runner",
            "James Dashner",
            Genre::SciFi,
            Length::Medium,
            "The maze runner.png",
            "Thomas wakes up in a glade with no memory. Surrounded by a deadly maze, he and the other boys must find a way out – or die trying.",
            &["Sequel: The Scorch Trials", "Sequel: The Death Cure"],
            &[("Chris", "4/5", "Pulse-pounding and mysterious.")],
        ),
        book(
            9,
            "The Inheritance Games",
            "Jennifer Lynn Barnes",
            Genre::Mystery,
            Length::Medium,
            "The inheritance game.png",
            "Avery Grambs inherits billions from a stranger she's never met. To claim it, she must move into his mansion and solve a dangerous puzzle alongside his hostile grandsons.",
            &["Sequel: The Hawthorne Legacy"],
            &[("Emma", "5/5", "Clever and twisty!")],
        ),
        book(
            10,
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Medium,
            "Harry potter 1.png",
            "Harry discovers he's a wizard and begins his first year at Hogwarts School of Witchcraft and Wizardry.",
            &["Sequel: Harry Potter and the Chamber of Secrets"],
            &[("Ava", "5/5", "Magical and unforgettable.")],
        ),
        book(
            11,
            "Harry Potter and the Chamber of Secrets",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Medium,
            "Harry potter 2.png",
            "A dark force threatens Hogwarts as the Chamber of Secrets is opened once more.",
            &[
                "Prequel: Harry Potter and the Philosopher's Stone",
                "Sequel: Harry Potter and the Prisoner of Azkaban",
            ],
            &[("Noah", "5/5", "Creepy mystery with great twists.")],
        ),
        book(
            12,
            "Harry Potter and the Prisoner of Azkaban",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Long,
            "Harry potter 3.png",
            "A dangerous prisoner escapes Azkaban and Harry uncovers secrets about his past.",
            &[
                "Prequel: Harry Potter and the Chamber of Secrets",
                "Sequel: Harry Potter and the Goblet of Fire",
            ],
            &[("Mia", "5/5", "Best one yet, so emotional.")],
        ),
        book(
            13,
            "Harry Potter and the Goblet of Fire",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Long,
            "Harry potter 4.png",
            "Harry is unexpectedly entered into the Triwizard Tournament, a deadly magical competition.",
            &[
                "Prequel: Harry Potter and the Prisoner of Azkaban",
                "Sequel: Harry Potter and the Order of the Phoenix",
            ],
            &[("Liam", "5/5", "Epic adventure and darker stakes.")],
        ),
        book(
            14,
            "Harry Potter and the Order of the Phoenix",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Long,
            "Harry potter 5.png",
            "Harry faces a rising dark threat while the Ministry denies Voldemort's return.",
            &[
                "Prequel: Harry Potter and the Goblet of Fire",
                "Sequel: Harry Potter and the Half-Blood Prince",
            ],
            &[("Ella", "5/5", "Intense and full of heart.")],
        ),
        book(
            15,
            "Harry Potter and the Half-Blood Prince",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Long,
            "Harry potter 6.png",
            "Harry and Dumbledore uncover Voldemort's past and the secret of the Horcruxes.",
            &[
                "Prequel: Harry Potter and the Order of the Phoenix",
                "Sequel: Harry Potter and the Deathly Hallows",
            ],
            &[("Sofia", "5/5", "Powerful and tragic.")],
        ),
        book(
            16,
            "Harry Potter and the Deathly Hallows",
            "J.K. Rowling",
            Genre::Fantasy,
            Length::Long,
            "Harry potter 7.png",
            "Harry, Ron, and Hermione leave Hogwarts to hunt Horcruxes and face Voldemort.",
            &["Prequel: Harry Potter and the Half-Blood Prince"],
            &[("Zoe", "5/5", "A satisfying, emotional finale.")],
        ),
        book(
            17,
            "Never Never",
            "Colleen Hoover & Tarryn Fisher",
            Genre::Romance,
            Length::Medium,
            "never never.png",
            "Two teens wake up with no memory of who they are or why they are together, and must uncover the truth about their relationship.",
            &["Sequel: Never Never Part Two", "Sequel: Never Never Part Three"],
            &[("Grace", "4/5", "Fast, addictive, and mysterious.")],
        ),
        book(
            18,
            "It Ends with Us",
            "Colleen Hoover",
            Genre::Romance,
            Length::Medium,
            "it ends with us .png",
            "Lily navigates a complex relationship that forces her to confront hard truths about love and choice.",
            &["Sequel: It Starts with Us"],
            &[("Hana", "5/5", "Emotional and thought-provoking.")],
        ),
        book(
            19,
            "Naruto Vol. 1",
            "Masashi Kishimoto",
            Genre::Manga,
            Length::Short,
            "Naruto.png",
            "Naruto Uzumaki, a mischievous ninja, dreams of becoming the Hokage and earning his village's respect.",
            &["Sequel: Naruto Vol. 1"],
            &[("Ken", "5/5", "Classic shonen start with tons of energy.")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 19);
        assert!(!catalog.is_empty());

        let ids: Vec<u32> = catalog.all_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let books = Catalog::builtin().all_books().to_vec();
        assert!(Catalog::new(books).is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        let book = catalog.find_by_id(4).unwrap();
        assert_eq!(book.title, "Death Note");
        assert_eq!(book.genre, Genre::Manga);
        assert_eq!(book.length, Length::Long);
        assert_eq!(book.reviews[0].reviewer, "Kai");
    }

    #[test]
    fn test_find_by_id_not_found() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.find_by_id(0),
            Err(ReadifyError::NotFound(0))
        ));
        assert!(matches!(
            catalog.find_by_id(99),
            Err(ReadifyError::NotFound(99))
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut books = Catalog::builtin().all_books()[..2].to_vec();
        books[1].id = books[0].id;
        assert!(matches!(
            Catalog::new(books),
            Err(ReadifyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_every_genre_is_stocked() {
        let catalog = Catalog::builtin();
        for genre in Genre::ALL {
            assert!(
                catalog.all_books().iter().any(|b| b.genre == genre),
                "no books for {}",
                genre
            );
        }
    }
}
