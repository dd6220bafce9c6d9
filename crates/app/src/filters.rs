//! Client-side filtering and pagination over an already-fetched day of
//! status rows. No backend round-trip happens here: only a date change
//! refetches, everything else re-slices the in-memory snapshot.

use shared_types::StatusRow;

/// Fixed rows-per-page for every dashboard table.
pub const PAGE_SIZE: usize = 10;

/// Row health filter for the status tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Every monitored column is "Available" (fully healthy).
    Available,
    /// At least one monitored column is "Missing".
    Missing,
}

impl StatusFilter {
    pub fn as_key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Available => "available",
            StatusFilter::Missing => "missing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(StatusFilter::All),
            "available" => Some(StatusFilter::Available),
            "missing" => Some(StatusFilter::Missing),
            _ => None,
        }
    }

    fn matches(&self, row: &StatusRow) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => row.fully_available(),
            StatusFilter::Missing => row.has_missing(),
        }
    }
}

/// Status filter first, then case-insensitive substring search over the user
/// identifier. An empty search term passes every row.
pub fn apply_filters(rows: &[StatusRow], filter: StatusFilter, search: &str) -> Vec<StatusRow> {
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| filter.matches(row))
        .filter(|row| needle.is_empty() || row.user_id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Page count for a filtered set; an empty set still renders one page.
pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// The 1-based page window of a slice. An out-of-range page yields an empty
/// slice; the pagination controls keep the page in range in practice.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    if start >= rows.len() {
        &[]
    } else {
        &rows[start..end]
    }
}
