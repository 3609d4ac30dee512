//! Cursor movement
//!
//! Pure functions for moving a cursor through a list of rows.

/// Move the cursor by `delta` rows, clamped to the list.
///
/// With no cursor, moving down lands on the first row and moving up on
/// the last one.
///
/// # Examples
/// ```
/// use repobrowse::logic::navigation::move_cursor;
///
/// assert_eq!(move_cursor(None, 0, 1), None);
/// assert_eq!(move_cursor(None, 3, 1), Some(0));
/// assert_eq!(move_cursor(None, 3, -1), Some(2));
/// assert_eq!(move_cursor(Some(1), 3, 1), Some(2));
/// assert_eq!(move_cursor(Some(2), 3, 10), Some(2));
/// assert_eq!(move_cursor(Some(1), 3, -10), Some(0));
/// ```
pub fn move_cursor(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;

    Some(match current {
        None if delta < 0 => last,
        None => 0,
        Some(i) => {
            let i = i.min(last);
            if delta < 0 {
                i.saturating_sub(delta.unsigned_abs())
            } else {
                i.saturating_add(delta as usize).min(last)
            }
        }
    })
}

/// Keep a cursor valid after the list changed length
pub fn clamp_cursor(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => None,
    }
}

/// First row whose key matches, for putting the cursor back on an item
pub fn position_of<T, F>(rows: &[T], mut matches: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    rows.iter().position(|row| matches(row))
}
