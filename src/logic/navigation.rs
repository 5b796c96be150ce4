//! Navigation selection logic
//!
//! Pure functions for moving a selection through a list. Panes wrap around;
//! the lightbox cursor stops at either end.

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Examples
/// ```
/// use photodeck::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use photodeck::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Step forward, stopping at the last index
///
/// # Examples
/// ```
/// use photodeck::logic::navigation::step_forward;
///
/// assert_eq!(step_forward(0, 5), 1);
/// assert_eq!(step_forward(4, 5), 4);
/// ```
pub fn step_forward(current: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    (current + 1).min(list_len - 1)
}

/// Step back, stopping at zero
pub fn step_back(current: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    current.saturating_sub(1).min(list_len - 1)
}

/// Keep a selection valid after the list it points into changed length
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(2), 3), Some(0));
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(0), 3), Some(2));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_step_never_leaves_bounds() {
        for len in 1..8usize {
            let mut cursor = 0;
            for _ in 0..20 {
                cursor = step_forward(cursor, len);
                assert!(cursor < len);
            }
            assert_eq!(cursor, len - 1);
            for _ in 0..20 {
                cursor = step_back(cursor, len);
                assert!(cursor < len);
            }
            assert_eq!(cursor, 0);
        }
    }

    #[test]
    fn test_step_empty_list() {
        assert_eq!(step_forward(0, 0), 0);
        assert_eq!(step_back(0, 0), 0);
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(7), 3), Some(2));
        assert_eq!(clamp_selection(None, 3), Some(0));
        assert_eq!(clamp_selection(Some(1), 0), None);
    }
}
