//! The search → sort → paginate pipeline behind every table.
//!
//! Everything here is pure. A screen keeps a [`QueryState`] for its search
//! box, sort selector and pager, and runs it over the store's records on each
//! render.

use std::cmp::Ordering;

/// A record that can be searched and sorted by the pipeline.
pub trait Queryable {
    /// The orderings this record supports.
    type SortKey: Copy + PartialEq + 'static;

    /// Whether the designated text field(s) contain `needle`.
    ///
    /// `needle` is already lower-cased and non-empty.
    fn matches(&self, needle: &str) -> bool;

    /// The value compared when sorting by `key`. Dates are milliseconds since
    /// the epoch. `None` means the field did not coerce to a finite number.
    fn sort_value(&self, key: Self::SortKey) -> Option<f64>;
}

/// Case-insensitive substring test against an already lower-cased needle.
pub fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The records on the requested page, in display order.
    pub items: Vec<T>,
    /// Always at least 1, even when nothing matched.
    pub total_pages: usize,
    /// Number of records that passed the search filter.
    pub total_matches: usize,
}

/// Keeps the records whose designated text contains `search`, ignoring case.
/// Relative order is preserved.
pub fn filter<'a, T: Queryable>(items: &'a [T], search: &str) -> Vec<&'a T> {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

/// Stable sort, largest value first. Values that did not coerce go last.
pub fn sort_descending<T: Queryable>(items: &mut [&T], key: T::SortKey) {
    items.sort_by(|a, b| compare_descending(a.sort_value(key), b.sort_value(key)));
}

fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        // Coerced values are finite; -0 and 0 must stay a tie.
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `max(1, ceil(matches / page_size))`.
pub fn total_pages(matches: usize, page_size: usize) -> usize {
    matches.div_ceil(page_size.max(1)).max(1)
}

/// Runs the whole pipeline.
///
/// `page` is 1-based. A page past the end, or page 0, yields no items rather
/// than being clamped; callers reset to page 1 whenever the search, sort or
/// underlying records change. A `page_size` of 0 is treated as 1.
pub fn query<T: Queryable + Clone>(
    items: &[T],
    search: &str,
    sort: Option<T::SortKey>,
    page: usize,
    page_size: usize,
) -> Page<T> {
    let page_size = page_size.max(1);
    let mut matched = filter(items, search);
    if let Some(key) = sort {
        sort_descending(&mut matched, key);
    }

    let total_matches = matched.len();
    let items = match page.checked_sub(1) {
        Some(index) => matched
            .iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .map(|item| (*item).clone())
            .collect(),
        None => Vec::new(),
    };

    Page {
        items,
        total_pages: total_pages(total_matches, page_size),
        total_matches,
    }
}

/// The search box, sort selector and current page of one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<K> {
    search: String,
    sort: Option<K>,
    page: usize,
    /// Store revision the current page was chosen against.
    revision: u64,
}

impl<K> Default for QueryState<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            revision: 0,
        }
    }
}

impl<K: Copy + PartialEq + 'static> QueryState<K> {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<K> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the search text and returns to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Replaces the sort key and returns to the first page.
    pub fn set_sort(&mut self, sort: Option<K>) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records a new store revision. When the records changed underneath the
    /// current page, returns to the first page and reports `true`.
    pub fn follow_revision(&mut self, revision: u64) -> bool {
        if self.revision == revision {
            return false;
        }
        self.revision = revision;
        self.page = 1;
        true
    }

    pub fn run<T>(&self, items: &[T], page_size: usize) -> Page<T>
    where
        T: Queryable<SortKey = K> + Clone,
    {
        query(items, &self.search, self.sort, self.page, page_size)
    }
}
