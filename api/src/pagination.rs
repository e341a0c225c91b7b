//! Page-number tokens for the pager under each table.

use std::fmt;

/// Show every page when there are at most this many.
pub const MAX_VISIBLE: usize = 7;
/// Pages always shown at each end.
const EDGE_COUNT: usize = 2;
/// Pages shown around the current one.
const WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum PageToken {
    Page(usize),
    /// A gap. Not clickable.
    Ellipsis,
}

impl PageToken {
    /// The page to navigate to when this token is clicked, if any.
    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// The tokens to render for `current` of `total` pages.
///
/// Up to [`MAX_VISIBLE`] pages are listed in full. Beyond that the first two
/// and last two pages are always shown, with a window of three pages centred
/// on `current` (kept inside `3..=total-2`) and an ellipsis marking each gap.
pub fn page_tokens(current: usize, total: usize) -> Vec<PageToken> {
    if total <= MAX_VISIBLE {
        return (1..=total).map(PageToken::Page).collect();
    }

    let first_middle = EDGE_COUNT + 1;
    let last_start = total - EDGE_COUNT - WINDOW + 1;
    let start = current
        .saturating_sub(WINDOW / 2)
        .clamp(first_middle, last_start);
    let end = start + WINDOW - 1;

    let mut tokens: Vec<PageToken> = (1..=EDGE_COUNT).map(PageToken::Page).collect();
    if start > first_middle {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total - EDGE_COUNT {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((total - EDGE_COUNT + 1..=total).map(PageToken::Page));
    tokens
}

/// Whether the "previous" control is enabled.
pub fn has_previous(current: usize) -> bool {
    current != 1
}

/// Whether the "next" control is enabled.
pub fn has_next(current: usize, total: usize) -> bool {
    current != total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use super::PageToken::Ellipsis as E;
    use super::PageToken::Page as P;

    #[test]
    fn small_page_counts_list_every_page() {
        assert_eq!(page_tokens(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(page_tokens(1, 1), vec![P(1)]);
        assert_eq!(page_tokens(7, 7).len(), 7);
    }

    #[rstest]
    #[case(5, 10, vec![P(1), P(2), E, P(4), P(5), P(6), E, P(9), P(10)])]
    #[case(1, 10, vec![P(1), P(2), P(3), P(4), P(5), E, P(9), P(10)])]
    #[case(4, 10, vec![P(1), P(2), P(3), P(4), P(5), E, P(9), P(10)])]
    #[case(10, 10, vec![P(1), P(2), E, P(6), P(7), P(8), P(9), P(10)])]
    #[case(7, 10, vec![P(1), P(2), E, P(6), P(7), P(8), P(9), P(10)])]
    #[case(1, 8, vec![P(1), P(2), P(3), P(4), P(5), E, P(7), P(8)])]
    #[case(5, 8, vec![P(1), P(2), E, P(4), P(5), P(6), P(7), P(8)])]
    fn large_page_counts_use_a_clamped_window(
        #[case] current: usize,
        #[case] total: usize,
        #[case] expected: Vec<PageToken>,
    ) {
        assert_eq!(page_tokens(current, total), expected);
    }

    #[test]
    fn ellipsis_is_inert() {
        assert_eq!(E.target(), None);
        assert_eq!(P(4).target(), Some(4));
        assert_eq!(E.to_string(), "...");
    }

    #[test]
    fn prev_and_next_disable_at_the_ends() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(!has_next(10, 10));
        assert!(has_next(9, 10));
    }
}
