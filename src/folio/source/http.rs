use super::CatalogSource;
use crate::error::Result;
use crate::model::Library;
use log::trace;

/// Catalog source backed by an http(s) URL.
///
/// One blocking GET per session. A non-success status is a fetch error, same
/// as a connection failure; callers cannot tell the two apart and are not
/// meant to.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self) -> Result<Library> {
        trace!("HttpSource::fetch() {}", self.url);
        let client = reqwest::blocking::Client::builder().build()?;
        let library = client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json::<Library>()?;
        Ok(library)
    }

    fn location(&self) -> &str {
        &self.url
    }
}
