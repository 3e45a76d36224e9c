use crate::Pagination;

/// Page sizes offered by the size changer
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page and size of a list request, sent as `?page=&limit=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination state of a server-paged table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl From<Pagination> for PageState {
    fn from(pagination: Pagination) -> Self {
        Self {
            current: pagination.page.max(1),
            page_size: pagination.limit.max(1),
            total: pagination.total,
        }
    }
}

impl PageState {
    /// Number of pages: `ceil(total / page_size)`
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The page to request after switching to `page_size`.
    ///
    /// The current page is kept unless it would fall past the last page.
    pub fn with_page_size(&self, page_size: u32) -> PageState {
        let mut next = PageState {
            page_size: page_size.max(1),
            ..*self
        };
        next.current = self.current.min(next.page_count()).max(1);
        next
    }

    pub fn with_page(&self, page: u32) -> PageState {
        PageState {
            current: page.max(1),
            ..*self
        }
    }

    /// The request that fetches exactly this page
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current,
            limit: self.page_size,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Parse the quick-jumper input, clamped to the existing pages.
    pub fn parse_jump(&self, input: &str) -> Option<u32> {
        let page = input.trim().parse::<u32>().ok()?;
        let last = self.page_count().max(1);
        Some(page.clamp(1, last))
    }

    pub fn total_label(&self) -> String {
        format!("Tổng: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current: u32, page_size: u32, total: u64) -> PageState {
        PageState { current, page_size, total }
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(state(1, 10, 0).page_count(), 0);
        assert_eq!(state(1, 10, 1).page_count(), 1);
        assert_eq!(state(1, 10, 10).page_count(), 1);
        assert_eq!(state(1, 10, 11).page_count(), 2);
        assert_eq!(state(1, 20, 41).page_count(), 3);
        assert_eq!(state(1, 50, 100).page_count(), 2);
    }

    #[test]
    fn test_from_backend_pagination() {
        let page = PageState::from(Pagination { page: 3, limit: 20, total: 55 });
        assert_eq!(page, state(3, 20, 55));
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn test_page_size_change_clamps_current_page() {
        assert_eq!(state(2, 10, 45).with_page_size(20).current, 2);
        assert_eq!(state(5, 10, 45).with_page_size(50).current, 1);
        assert_eq!(state(1, 10, 0).with_page_size(20).current, 1);
    }

    #[test]
    fn test_query_follows_requested_page_and_size() {
        let page = state(1, 20, 95);
        assert_eq!(page.with_page(4).query(), ListQuery { page: 4, limit: 20 });
        assert_eq!(page.with_page_size(50).query(), ListQuery { page: 1, limit: 50 });
        assert_eq!(PageState::default().query(), ListQuery::default());
        assert_eq!(ListQuery::default(), ListQuery { page: 1, limit: DEFAULT_PAGE_SIZE });
    }

    #[test]
    fn test_previous_and_next() {
        assert!(!state(1, 10, 25).has_previous());
        assert!(state(1, 10, 25).has_next());
        assert!(state(3, 10, 25).has_previous());
        assert!(!state(3, 10, 25).has_next());
    }

    #[test]
    fn test_quick_jumper_input() {
        let page = state(1, 10, 95);
        assert_eq!(page.parse_jump("4"), Some(4));
        assert_eq!(page.parse_jump(" 7 "), Some(7));
        assert_eq!(page.parse_jump("99"), Some(10));
        assert_eq!(page.parse_jump("0"), Some(1));
        assert_eq!(page.parse_jump("abc"), None);
        assert_eq!(page.parse_jump(""), None);
    }

    #[test]
    fn test_total_label() {
        assert_eq!(state(1, 10, 42).total_label(), "Tổng: 42");
    }
}
