//! Page-number strip for paginated tables.

use serde::{Serialize, Serializer};

/// Totals at or below this show every page.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One entry in a page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    /// An elided range of pages.
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Build the page strip for `current_page` of `total_pages`.
///
/// First and last pages are always present, with a window of one page
/// either side of the current page clamped to `2..=total_pages - 1` and an
/// ellipsis wherever the window leaves a gap.
pub fn build_page_numbers(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current_page as i64;
    let last = total_pages as i64;
    let start = (current - 1).max(2);
    let end = (current + 1).min(last - 1);

    let mut pages = vec![PageItem::Page(1)];
    if start > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((start..=end).map(|p| PageItem::Page(p as u32)));
    if end < last - 1 {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Page(total_pages));
    pages
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_few_pages_all_shown() {
        assert_eq!(build_page_numbers(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            build_page_numbers(4, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(build_page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_middle_page_has_both_ellipses() {
        assert_eq!(
            build_page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_first_page() {
        assert_eq!(
            build_page_numbers(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_near_start_no_leading_ellipsis() {
        assert_eq!(
            build_page_numbers(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            build_page_numbers(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            build_page_numbers(9, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_out_of_range_current_page() {
        assert_eq!(build_page_numbers(0, 10), vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(build_page_numbers(20, 10), vec![Page(1), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_serializes_like_js_union() {
        let json = serde_json::to_string(&build_page_numbers(5, 10)).unwrap();
        assert_eq!(json, r#"[1,"ellipsis",4,5,6,"ellipsis",10]"#);
    }
}
