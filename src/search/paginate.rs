use crate::error::{Result, SearchError};
use crate::models::{Links, Pagination};

/// Path the navigation links point at.
pub const SEARCH_PATH: &str = "/search";

/// One page sliced from a ranked sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub links: Links,
}

fn link(offset: usize, limit: usize) -> String {
    format!("{SEARCH_PATH}?offset={offset}&limit={limit}")
}

/// `offset / limit + 1`, or `InvalidPage` when `limit` is zero or the page
/// number overflows.
fn page_number(offset: usize, limit: usize) -> Result<usize> {
    offset
        .checked_div(limit)
        .and_then(|page| page.checked_add(1))
        .ok_or(SearchError::InvalidPage { offset, limit })
}

/// Slice `ranked[offset..offset + limit]` and describe where it sits.
///
/// `current_page` is `offset / limit + 1` whether or not `offset` falls on a
/// page boundary. `last` points at the first item of the final non-empty
/// page, so an exact multiple of `limit` does not produce an empty last page.
/// Fails with `InvalidPage` for a zero `limit` or an unrepresentable page.
pub fn paginate<T: Clone>(ranked: &[T], offset: usize, limit: usize) -> Result<Page<T>> {
    let total_items = ranked.len();
    let current_page = page_number(offset, limit)?;
    let total_pages = total_items.div_ceil(limit);

    let items = ranked
        .iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    let prev = (current_page != 1).then(|| link(offset - limit, limit));
    let next = (current_page != total_pages && offset < total_items)
        .then(|| link(offset + limit, limit));
    let last = total_items.saturating_sub(1) / limit * limit;

    Ok(Page {
        items,
        pagination: Pagination {
            offset,
            limit,
            total_items,
            total_pages,
            current_page,
        },
        links: Links {
            self_link: link(offset, limit),
            first: link(0, limit),
            prev,
            next,
            last: link(last, limit),
        },
    })
}

/// The page returned when nothing matched: no items, zero pages, and every
/// link other than `self` pointing at offset 0. `offset` and `limit` are
/// checked the same way as in [`paginate`].
pub fn empty_page<T>(offset: usize, limit: usize) -> Result<Page<T>> {
    page_number(offset, limit)?;
    Ok(Page {
        items: Vec::new(),
        pagination: Pagination {
            offset,
            limit,
            total_items: 0,
            total_pages: 0,
            current_page: 1,
        },
        links: Links {
            self_link: link(offset, limit),
            first: link(0, limit),
            prev: None,
            next: None,
            last: link(0, limit),
        },
    })
}
