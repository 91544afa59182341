use super::CatalogSource;
use crate::error::Result;
use crate::model::Library;

/// In-memory catalog source for testing and development.
/// Does NOT touch the filesystem or the network.
pub struct StaticSource {
    library: Library,
    location: String,
}

impl StaticSource {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            location: "static://catalog".to_string(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Library> {
        Ok(self.library.clone())
    }

    fn location(&self) -> &str {
        &self.location
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Book, Chapter, Comment, Library};

    pub fn chapter(id: u32, title: &str, likes: u32) -> Chapter {
        Chapter {
            id,
            title: title.to_string(),
            content: format!("<p>Body of {}.</p>", title),
            likes,
            comments: Vec::new(),
        }
    }

    pub fn book(id: u32, title: &str, author: &str, chapters: Vec<Chapter>) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            cover: format!("covers/{}.jpg", id),
            chapters,
        }
    }

    /// Two books; book 1 has chapters 1 and 2, chapter 1 carries one stored
    /// comment and five likes.
    pub fn sample_library() -> Library {
        let mut first = chapter(1, "First Light", 5);
        first.comments.push(Comment::new("Mara", "Loved this one."));

        Library {
            books: vec![
                book(
                    1,
                    "The Nebula",
                    "R. Voss",
                    vec![first, chapter(2, "Falling Inward", 0)],
                ),
                book(2, "Saltwater", "E. Ngue", vec![chapter(1, "Tides", 3)]),
            ],
        }
    }
}
