use super::{PageNumber, SearchResults, SearchTerm};

/// Articles requested per upstream page.
pub const PAGE_SIZE: u32 = 20;

/// Number of pages needed to show `total_results` articles.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn total_pages(total_results: u64) -> u32 {
    (total_results as f64 / PAGE_SIZE as f64).ceil() as u32
}

/// State of a single search request: what was asked for and what came back.
#[derive(Debug, Clone)]
pub struct Search {
    pub term: SearchTerm,
    pub next_page: PageNumber,
    pub total_pages: u32,
    pub results: SearchResults,
}

impl Search {
    pub fn new(term: SearchTerm, next_page: PageNumber, results: SearchResults) -> Self {
        let total_pages = total_pages(results.total_results);
        Self {
            term,
            next_page,
            total_pages,
            results,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page.get() >= self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        match self.next_page.get() {
            1 => 1,
            page => page - 1,
        }
    }

    /// May be zero on the first page; callers decide whether to link it.
    pub fn previous_page(&self) -> i64 {
        i64::from(self.current_page()) - 1
    }

    /// Target of the "next" link, `None` once the last page is reached.
    pub fn following_page(&self) -> Option<u32> {
        if self.is_last_page() {
            None
        } else {
            Some(self.next_page.get() + 1)
        }
    }
}
