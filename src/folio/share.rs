//! Share-link synthesis.
//!
//! Both targets are rebuilt on every page composition from the catalog
//! location (the "page URL") and the active book/chapter titles. Query
//! parameters go through `reqwest::Url` so escaping is never hand-rolled.

use crate::error::{FolioError, Result};
use reqwest::Url;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// The two share targets of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub tweet: String,
    pub facebook: String,
}

pub fn share_links(page_url: &str, book_title: &str, chapter_title: &str) -> Result<ShareLinks> {
    let message = format!(
        "I'm reading \"{}\" from the book \"{}\"! Check it out:",
        chapter_title, book_title
    );

    let tweet = Url::parse_with_params(TWEET_INTENT, &[("url", page_url), ("text", message.as_str())])
        .map_err(|e| FolioError::Share(e.to_string()))?;
    let facebook = Url::parse_with_params(FACEBOOK_SHARER, &[("u", page_url)])
        .map_err(|e| FolioError::Share(e.to_string()))?;

    Ok(ShareLinks {
        tweet: tweet.to_string(),
        facebook: facebook.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_link_carries_page_url_and_titles() {
        let links = share_links("https://example.com/reader", "The Nebula", "First Light").unwrap();

        assert!(links.tweet.starts_with("https://twitter.com/intent/tweet?"));
        assert!(links.tweet.contains("https%3A%2F%2Fexample.com%2Freader"));
        assert!(links.tweet.contains("Nebula"));
        assert!(links.tweet.contains("First"));
        // Quotes in the message must be escaped, never literal.
        assert!(links.tweet.contains("%22"));
        assert!(!links.tweet.contains('"'));
    }

    #[test]
    fn facebook_link_carries_page_url() {
        let links = share_links("https://example.com/reader", "The Nebula", "First Light").unwrap();

        assert!(links.facebook.starts_with("https://www.facebook.com/sharer/sharer.php?"));
        assert!(links.facebook.contains("https%3A%2F%2Fexample.com%2Freader"));
    }

    #[test]
    fn file_path_page_urls_are_escaped_not_rejected() {
        let links = share_links("catalogs/data 2.json", "A", "B").unwrap();
        assert!(links.tweet.contains("url="));
        assert!(!links.tweet.contains(' '));
    }
}
