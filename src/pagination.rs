use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Builds the page window rendered by the pager: both edges, the pages around
/// the current one, and `None` wherever a gap is skipped.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.min(last_page);
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Pagination block attached to list envelopes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl PageMeta {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = if per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            per_page
        };
        let total_pages = total.div_ceil(per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            pages: get_pages(total_pages, page, 2, 2, 4, 2),
        }
    }

    /// Index range of the current page inside a list of `total` items.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(self.total);
        let end = start.saturating_add(self.per_page).min(self.total);
        start..end
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Cuts the requested page out of the full item list.
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let meta = PageMeta::new(page, per_page, items.len());
        let range = meta.range();
        let items = items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        Self { items, meta }
    }
}
