//! Pure page composition.
//!
//! [`compose`] maps session state to a [`ReaderPage`], a complete description
//! of what a UI should show. There is no incremental mutation: every state
//! change re-composes the whole page, so display order can never drift from
//! session state.

use crate::error::Result;
use crate::model::Comment;
use crate::session::ReaderSession;
use crate::share::{share_links, ShareLinks};
use crate::text::html_to_text;

/// Shown in place of the comment list when a chapter has none.
pub const NO_COMMENTS_PLACEHOLDER: &str = "No comments yet. Be the first!";

#[derive(Debug, Clone)]
pub struct Sidebar {
    pub cover: String,
    pub title: String,
    pub byline: String,
}

#[derive(Debug, Clone)]
pub struct NavEntry {
    pub chapter_id: u32,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ReaderPage {
    pub sidebar: Sidebar,
    pub nav: Vec<NavEntry>,
    pub chapter_title: String,
    /// Chapter body rendered to plain text.
    pub body: String,
    pub like_count: u32,
    pub liked: bool,
    /// Empty means "show the placeholder", never "show nothing".
    pub comments: Vec<Comment>,
    pub share: ShareLinks,
}

/// Composes the full page for the session's current selection.
pub fn compose(session: &ReaderSession) -> Result<ReaderPage> {
    let book = session.current_book();
    let chapter = session.current_chapter();

    let nav = book
        .chapters
        .iter()
        .map(|c| NavEntry {
            chapter_id: c.id,
            title: c.title.clone(),
            active: c.id == chapter.id,
        })
        .collect();

    let comments = session
        .comments()
        .into_iter()
        .map(|c| Comment {
            user: c.user,
            text: html_to_text(&c.text),
        })
        .collect();

    Ok(ReaderPage {
        sidebar: Sidebar {
            cover: book.cover.clone(),
            title: book.title.clone(),
            byline: format!("by {}", book.author),
        },
        nav,
        chapter_title: chapter.title.clone(),
        body: html_to_text(&chapter.content),
        like_count: session.like_count(),
        liked: session.liked(),
        comments,
        share: share_links(session.location(), &book.title, &chapter.title)?,
    })
}
