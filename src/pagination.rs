//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to show when the catalog is first opened.
    pub default_page: u64,
    /// The maximum number of records to display per page.
    pub page_size: u64,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
            max_pages: 5,
        }
    }
}

/// The number of pages needed to show `item_count` items, `page_size` at a time.
///
/// Returns zero for an empty list or a zero page size.
pub fn page_count(item_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    item_count.div_ceil(page_size)
}

#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    Ellipsis,
    NextButton(u64),
    BackButton(u64),
}

/// Lay out the links of a pagination bar.
///
/// At most `max_pages` numbered pages are shown around `curr_page`. The first
/// and last page stay reachable through ellipses when they fall outside that
/// window.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let as_indicator = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let half_window = max_pages / 2;
    let window = if page_count <= max_pages {
        1..=page_count
    } else if curr_page <= half_window {
        1..=max_pages
    } else if curr_page > page_count - half_window {
        (page_count - max_pages + 1)..=page_count
    } else {
        (curr_page - half_window)..=(curr_page + half_window)
    };

    let mut indicators = Vec::new();

    if curr_page > 1 {
        indicators.push(PaginationIndicator::BackButton(curr_page - 1));
    }

    let is_windowed = page_count > max_pages;

    if is_windowed && curr_page > half_window + 1 {
        indicators.push(PaginationIndicator::Page(1));
        indicators.push(PaginationIndicator::Ellipsis);
    }

    indicators.extend(window.map(as_indicator));

    if is_windowed && curr_page < page_count - half_window {
        indicators.push(PaginationIndicator::Ellipsis);
        indicators.push(PaginationIndicator::Page(page_count));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
