use serde::Serialize;

/// Number of employees requested per page, matching the backend contract.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Pages linked on each side of the active one by the pagination control.
const PAGE_LINK_RADIUS: usize = 3;

/// 1-based page links for the control: the first and last page stay
/// visible, a window of [`PAGE_LINK_RADIUS`] pages surrounds the active
/// one, and `None` marks each elided run.
fn page_links(current: usize, total: usize) -> Vec<Option<usize>> {
    if total == 0 {
        return Vec::new();
    }

    let window_start = current.saturating_sub(PAGE_LINK_RADIUS).max(1);
    let window_end = (current + PAGE_LINK_RADIUS).min(total);

    let mut links = Vec::new();

    if window_start > 1 {
        links.push(Some(1));
        if window_start > 2 {
            links.push(None);
        }
    }

    links.extend((window_start..=window_end).map(Some));

    if window_end < total {
        if window_end + 1 < total {
            links.push(None);
        }
        links.push(Some(total));
    }

    links
}

/// A page of employees plus the window of page links shown by the control.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            pages: page_links(page, total_pages),
            page,
        }
    }
}
