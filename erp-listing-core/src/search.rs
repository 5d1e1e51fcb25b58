//! Free-text search and status filtering for paginated lists.
//!
//! Filtering happens on the record set, not on rendered rows: every query
//! change reloads the paginator with the matching subset, so search and
//! pagination always agree on what is visible. The cost is that each change
//! goes back to page 1.

use crate::host::StripHost;
use crate::pagination::Paginator;
use tracing::debug;

/// Shown when a non-empty query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "Nenhum resultado encontrado para a pesquisa.";

/// A record that can be matched by [`ListQuery`].
pub trait Searchable {
    /// All text a user could search for, in any case.
    fn search_text(&self) -> String;

    fn status(&self) -> Option<&str> {
        None
    }
}

impl Searchable for String {
    fn search_text(&self) -> String {
        self.clone()
    }
}

impl Searchable for &str {
    fn search_text(&self) -> String {
        self.to_string()
    }
}

/// Case-insensitive substring term plus an optional exact status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    term: String,
    status: Option<String>,
}

impl ListQuery {
    pub fn new(term: &str) -> Self {
        Self {
            term: normalize(term),
            status: None,
        }
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.status.is_none()
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if let Some(status) = &self.status {
            if record.status() != Some(status.as_str()) {
                return false;
            }
        }
        self.term.is_empty() || record.search_text().to_lowercase().contains(&self.term)
    }

    pub fn apply<T: Searchable + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Full record set of a screen plus the query currently applied to it.
#[derive(Debug, Clone)]
pub struct FilteredList<T> {
    all: Vec<T>,
    query: ListQuery,
}

impl<T: Searchable + Clone> FilteredList<T> {
    pub fn new(all: Vec<T>) -> Self {
        Self {
            all,
            query: ListQuery::default(),
        }
    }

    /// Swap in freshly fetched records, keeping the query.
    pub fn replace_all(&mut self, all: Vec<T>) {
        self.all = all;
    }

    pub fn set_term(&mut self, term: &str) {
        self.query.term = normalize(term);
    }

    pub fn set_status(&mut self, status: Option<&str>) {
        self.query = std::mem::take(&mut self.query).with_status(status);
    }

    pub fn set_query(&mut self, query: ListQuery) {
        self.query = query;
    }

    pub fn clear(&mut self) {
        self.query = ListQuery::default();
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn all(&self) -> &[T] {
        &self.all
    }

    pub fn visible(&self) -> Vec<T> {
        if self.query.is_empty() {
            self.all.clone()
        } else {
            self.query.apply(&self.all)
        }
    }

    /// True when a query is active and nothing matches it.
    pub fn has_no_results(&self) -> bool {
        !self.query.is_empty() && !self.all.iter().any(|r| self.query.matches(r))
    }

    /// Reload `paginator` with the records matching the current query.
    pub fn apply_to<H: StripHost>(&self, paginator: &mut Paginator<T, H>) {
        let visible = self.visible();
        debug!(
            term = %self.query.term(),
            status = ?self.query.status(),
            matched = visible.len(),
            total = self.all.len(),
            "Applying list query"
        );
        paginator.reload(visible);
    }
}
