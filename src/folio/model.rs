use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full catalog of books, loaded once per session from a catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    /// Cover image URL, passed through to the rendered page as-is.
    pub cover: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    /// Rich-text chapter body. Rendered through [`crate::text::html_to_text`],
    /// never inserted as raw markup.
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

impl Library {
    pub fn book(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn first_book(&self) -> Option<&Book> {
        self.books.first()
    }

    /// Checks the catalog invariants: at least one book, book ids unique
    /// within the library, chapter ids unique within each book.
    ///
    /// Runs once at the load boundary—a violation is a load failure, so the
    /// session never has to re-check id lookups.
    pub fn validate(&self) -> Result<()> {
        if self.books.is_empty() {
            return Err(FolioError::Catalog("catalog has no books".to_string()));
        }

        let mut book_ids = HashSet::new();
        for book in &self.books {
            if !book_ids.insert(book.id) {
                return Err(FolioError::Catalog(format!(
                    "duplicate book id {} in catalog",
                    book.id
                )));
            }

            let mut chapter_ids = HashSet::new();
            for chapter in &book.chapters {
                if !chapter_ids.insert(chapter.id) {
                    return Err(FolioError::Catalog(format!(
                        "duplicate chapter id {} in book {}",
                        chapter.id, book.id
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Book {
    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn first_chapter(&self) -> Option<&Chapter> {
        self.chapters.first()
    }
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}
