//! The reader session: the controller every UI talks to.
//!
//! A session owns the loaded [`Library`] plus three pieces of view state:
//! the selection (which book/chapter is on display), the session-local liked
//! flag, and comments submitted during this session. The library itself is
//! never mutated—likes and comments are cosmetic and reset on every chapter
//! switch.

use crate::error::{FolioError, Result};
use crate::model::{Book, Chapter, Comment, Library};
use crate::source::CatalogSource;
use log::{debug, trace};

/// Book and chapter ids selected when the caller doesn't ask for anything.
pub const DEFAULT_BOOK_ID: u32 = 1;
pub const DEFAULT_CHAPTER_ID: u32 = 1;

#[derive(Debug)]
pub struct ReaderSession {
    library: Library,
    location: String,
    book_idx: usize,
    chapter_idx: usize,
    liked: bool,
    // Submitted this session, oldest first; read newest-first for display.
    session_comments: Vec<Comment>,
}

impl ReaderSession {
    /// Fetches the catalog once and opens a session on the requested book and
    /// chapter, defaulting to ids (1, 1).
    ///
    /// If the requested (or default) ids are absent the session falls back to
    /// the first book and its first chapter rather than opening empty. An
    /// empty catalog, or a selected book with no chapters, is a load failure.
    pub fn open<S: CatalogSource>(
        source: &S,
        want_book: Option<u32>,
        want_chapter: Option<u32>,
    ) -> Result<Self> {
        trace!("ReaderSession::open() from {}", source.location());
        let library = source.fetch()?;
        library.validate()?;

        let book_id = want_book.unwrap_or(DEFAULT_BOOK_ID);
        let book_idx = library
            .books
            .iter()
            .position(|b| b.id == book_id)
            .unwrap_or(0);
        let book = &library.books[book_idx];

        let chapter_id = want_chapter.unwrap_or(DEFAULT_CHAPTER_ID);
        let chapter_idx = book
            .chapters
            .iter()
            .position(|c| c.id == chapter_id)
            .unwrap_or(0);
        if book.chapters.is_empty() {
            return Err(FolioError::Catalog(format!(
                "book {} has no chapters",
                book.id
            )));
        }

        debug!(
            "opened session on book {} chapter {}",
            book.id, book.chapters[chapter_idx].id
        );

        Ok(Self {
            library,
            location: source.location().to_string(),
            book_idx,
            chapter_idx,
            liked: false,
            session_comments: Vec::new(),
        })
    }

    /// Switches the view to the given book and chapter.
    ///
    /// If either id doesn't exist this is a silent no-op returning `false`:
    /// no state changes, nothing is surfaced. On success the transient view
    /// state resets—liked flag off, like count back to the chapter's stored
    /// value, session comments discarded.
    pub fn select_chapter(&mut self, book_id: u32, chapter_id: u32) -> bool {
        trace!("ReaderSession::select_chapter({}, {})", book_id, chapter_id);
        let Some(book_idx) = self.library.books.iter().position(|b| b.id == book_id) else {
            debug!("select_chapter: no book {}", book_id);
            return false;
        };
        let Some(chapter_idx) = self.library.books[book_idx]
            .chapters
            .iter()
            .position(|c| c.id == chapter_id)
        else {
            debug!("select_chapter: no chapter {} in book {}", chapter_id, book_id);
            return false;
        };

        self.book_idx = book_idx;
        self.chapter_idx = chapter_idx;
        self.liked = false;
        self.session_comments.clear();
        true
    }

    /// Flips the session-local liked flag. The displayed count moves by one,
    /// the stored value never changes.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Records a transient comment shown above all others. No validation:
    /// empty user or text is accepted verbatim. Never written to the library.
    pub fn submit_comment(&mut self, user: &str, text: &str) {
        self.session_comments.push(Comment::new(user, text));
    }

    pub fn current_book(&self) -> &Book {
        &self.library.books[self.book_idx]
    }

    pub fn current_chapter(&self) -> &Chapter {
        &self.current_book().chapters[self.chapter_idx]
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    /// The like count on display: the chapter's stored value, plus one while
    /// the session flag is set.
    pub fn like_count(&self) -> u32 {
        self.current_chapter().likes.saturating_add(u32::from(self.liked))
    }

    /// Comments for display: session submissions newest-first, then the
    /// chapter's stored comments in data order.
    pub fn comments(&self) -> Vec<Comment> {
        self.session_comments
            .iter()
            .rev()
            .chain(self.current_chapter().comments.iter())
            .cloned()
            .collect()
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Where the catalog was loaded from; doubles as the page URL for
    /// share links.
    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, Library};
    use crate::source::memory::fixtures::{book, chapter, sample_library};
    use crate::source::memory::StaticSource;

    fn open_sample() -> ReaderSession {
        ReaderSession::open(&StaticSource::new(sample_library()), None, None).unwrap()
    }

    #[test]
    fn opens_on_book_1_chapter_1_by_default() {
        let session = open_sample();
        assert_eq!(session.current_book().id, 1);
        assert_eq!(session.current_chapter().id, 1);
        assert!(!session.liked());
        assert_eq!(session.like_count(), 5);
    }

    #[test]
    fn opens_on_requested_book_and_chapter() {
        let source = StaticSource::new(sample_library());
        let session = ReaderSession::open(&source, Some(1), Some(2)).unwrap();
        assert_eq!(session.current_chapter().title, "Falling Inward");
    }

    #[test]
    fn falls_back_to_first_book_when_default_ids_are_absent() {
        let library = Library {
            books: vec![book(40, "Offset", "A.", vec![chapter(9, "Nine", 0)])],
        };
        let session = ReaderSession::open(&StaticSource::new(library), None, None).unwrap();
        assert_eq!(session.current_book().id, 40);
        assert_eq!(session.current_chapter().id, 9);
    }

    #[test]
    fn empty_catalog_fails_to_open() {
        let source = StaticSource::new(Library { books: vec![] });
        assert!(ReaderSession::open(&source, None, None).is_err());
    }

    #[test]
    fn chapterless_book_fails_to_open() {
        let library = Library {
            books: vec![Book {
                id: 1,
                title: "Hollow".to_string(),
                author: "A.".to_string(),
                cover: String::new(),
                chapters: vec![],
            }],
        };
        let err = ReaderSession::open(&StaticSource::new(library), None, None).unwrap_err();
        assert!(err.to_string().contains("no chapters"));
    }

    #[test]
    fn select_chapter_switches_and_reports_true() {
        let mut session = open_sample();
        assert!(session.select_chapter(1, 2));
        assert_eq!(session.current_chapter().id, 2);
        assert!(session.select_chapter(1, 1));
        assert_eq!(session.current_chapter().id, 1);
    }

    #[test]
    fn select_chapter_with_unknown_book_is_a_silent_noop() {
        let mut session = open_sample();
        session.toggle_like();
        session.submit_comment("Ann", "hi");

        assert!(!session.select_chapter(99, 1));

        // Nothing changed, including transient state.
        assert_eq!(session.current_book().id, 1);
        assert_eq!(session.current_chapter().id, 1);
        assert!(session.liked());
        assert_eq!(session.comments()[0].user, "Ann");
    }

    #[test]
    fn select_chapter_with_unknown_chapter_is_a_silent_noop() {
        let mut session = open_sample();
        assert!(!session.select_chapter(1, 42));
        assert_eq!(session.current_chapter().id, 1);
    }

    #[test]
    fn double_toggle_returns_count_to_stored_value() {
        let mut session = open_sample();
        assert_eq!(session.like_count(), 5);

        session.toggle_like();
        assert!(session.liked());
        assert_eq!(session.like_count(), 6);

        session.toggle_like();
        assert!(!session.liked());
        assert_eq!(session.like_count(), 5);
    }

    #[test]
    fn like_count_saturates_at_the_counter_ceiling() {
        let library = Library {
            books: vec![book(1, "Maxed", "A.", vec![chapter(1, "One", u32::MAX)])],
        };
        let mut session = ReaderSession::open(&StaticSource::new(library), None, None).unwrap();

        session.toggle_like();
        assert!(session.liked());
        assert_eq!(session.like_count(), u32::MAX);

        session.toggle_like();
        assert_eq!(session.like_count(), u32::MAX);
    }

    #[test]
    fn select_chapter_resets_like_state() {
        let mut session = open_sample();
        session.toggle_like();
        assert_eq!(session.like_count(), 6);

        session.select_chapter(1, 2);
        assert!(!session.liked());
        assert_eq!(session.like_count(), 0);

        // Back to chapter 1: stored value again, not the toggled one.
        session.select_chapter(1, 1);
        assert!(!session.liked());
        assert_eq!(session.like_count(), 5);
    }

    #[test]
    fn submitted_comments_go_newest_first_above_stored_ones() {
        let mut session = open_sample();
        session.submit_comment("Ann", "Great!");
        session.submit_comment("Bo", "Nice");

        let comments = session.comments();
        assert_eq!(comments[0].user, "Bo");
        assert_eq!(comments[1].user, "Ann");
        assert_eq!(comments[2].user, "Mara"); // stored comment stays last
    }

    #[test]
    fn empty_comment_fields_are_accepted() {
        let mut session = open_sample();
        session.submit_comment("", "");
        assert_eq!(session.comments()[0], Comment::new("", ""));
    }

    #[test]
    fn select_chapter_discards_session_comments() {
        let mut session = open_sample();
        session.submit_comment("Ann", "Great!");
        session.select_chapter(1, 2);
        assert!(session.comments().is_empty());
    }
}
