//! Pagination cursors over the location area listing.

use crate::models::LocationAreaPage;
use crate::session::Pokedex;

/// Mutable state of one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    next: Option<String>,
    previous: Option<String>,
    page_shown: bool,
    pub pokedex: Pokedex,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cursors of the page just displayed.
    pub fn advance(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.page_shown = true;
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// True once any page of the listing has been displayed.
    pub fn page_shown(&self) -> bool {
        self.page_shown
    }

    /// True when a page was shown and it was the last one.
    pub fn on_last_page(&self) -> bool {
        self.page_shown && self.next.is_none()
    }
}
