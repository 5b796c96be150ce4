//! Page slicing
//!
//! Pure functions for splitting an ordered image list into fixed-size pages.
//! Pages are 1-based. The list is never re-sorted here.

/// Images per page, in the terminal gallery and in the HTTP listing
pub const PAGE_SIZE: usize = 50;

/// Number of pages for `count` items; an empty list still has one (empty) page
///
/// # Examples
/// ```
/// use photodeck::logic::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 50), 1);
/// assert_eq!(total_pages(50, 50), 1);
/// assert_eq!(total_pages(51, 50), 2);
/// assert_eq!(total_pages(120, 50), 3);
/// ```
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Page number typed into the go-to-page prompt, if it names an existing page
///
/// # Examples
/// ```
/// use photodeck::logic::pagination::parse_page_input;
///
/// assert_eq!(parse_page_input("3", 5), Some(3));
/// assert_eq!(parse_page_input(" 05 ", 5), Some(5));
/// assert_eq!(parse_page_input("6", 5), None);
/// assert_eq!(parse_page_input("0", 5), None);
/// assert_eq!(parse_page_input("", 5), None);
/// ```
pub fn parse_page_input(input: &str, total: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|page| (1..=total).contains(page))
}

/// One page of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// Page actually used after clamping
    pub page: usize,
    pub total_pages: usize,
}

/// Slice `items` to `page`, clamping the page into range first
///
/// # Examples
/// ```
/// use photodeck::logic::pagination::paginate;
///
/// let items: Vec<u32> = (0..120).collect();
/// let slice = paginate(&items, 3, 50);
/// assert_eq!(slice.items.len(), 20);
/// assert_eq!(slice.items[0], 100);
///
/// // Past the end clamps to the last page
/// assert_eq!(paginate(&items, 9, 50).page, 3);
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let total = total_pages(items.len(), page_size);
    let page = clamp_page(page, total);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    PageSlice {
        items: &items[start..end],
        page,
        total_pages: total,
    }
}
