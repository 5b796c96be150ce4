//! Layout calculation logic
//!
//! Pure functions for the pagination bar.

/// Which page numbers fit in the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
    /// Pages exist before `first`
    pub more_before: bool,
    /// Pages exist after `last`
    pub more_after: bool,
}

/// Calculate the window of page numbers shown in the pagination bar
///
/// Every page is listed when they fit in `width` cells; otherwise the window
/// slides to keep the current page visible, roughly centred.
///
/// # Layout Strategy
/// - Each page label takes its digit count plus 2 cells (padding)
/// - Ellipsis markers take 2 cells each when shown
///
/// # Examples
/// ```
/// use photodeck::logic::layout::page_window;
///
/// // 3 pages fit easily
/// let window = page_window(2, 3, 80);
/// assert_eq!((window.first, window.last), (1, 3));
/// assert!(!window.more_before && !window.more_after);
///
/// // 100 pages in 30 cells: window slides around page 50
/// let window = page_window(50, 100, 30);
/// assert!(window.first <= 50 && 50 <= window.last);
/// assert!(window.more_before && window.more_after);
/// ```
pub fn page_window(current: usize, total: usize, width: u16) -> PageWindow {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let width = width as usize;

    let label_width = |page: usize| page.to_string().len() + 2;
    let full: usize = (1..=total).map(label_width).sum();
    if full <= width {
        return PageWindow {
            first: 1,
            last: total,
            more_before: false,
            more_after: false,
        };
    }

    // Reserve room for both ellipsis markers, grow outwards from the current page
    let budget = width.saturating_sub(4);
    let mut first = current;
    let mut last = current;
    let mut used = label_width(current);

    loop {
        let mut grew = false;
        if last < total && used + label_width(last + 1) <= budget {
            last += 1;
            used += label_width(last);
            grew = true;
        }
        if first > 1 && used + label_width(first - 1) <= budget {
            first -= 1;
            used += label_width(first);
            grew = true;
        }
        if !grew {
            break;
        }
    }

    PageWindow {
        first,
        last,
        more_before: first > 1,
        more_after: last < total,
    }
}
