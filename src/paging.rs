//! Pagination Helpers
//!
//! Pure page/size math behind the client table footer.

/// Selectable page sizes for the table footer
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

/// Initial rows per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The slice of the collection currently requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRequest {
    pub fn new() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size jumps back to the first page so the request
    /// never lands past the end of the collection. Sizes outside
    /// `PAGE_SIZE_OPTIONS` are ignored.
    pub fn with_size(self, size: usize) -> Self {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return self;
        }
        Self { page: 0, size }
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> u64 {
        (self.page * self.size) as u64
    }

    /// Rows the server is expected to return for a collection of `total`
    pub fn rows_expected(&self, total: u64) -> usize {
        total.saturating_sub(self.offset()).min(self.size as u64) as usize
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.offset() + (self.size as u64) < total
    }

    /// Footer label, e.g. "1–5 of 12"
    pub fn range_label(&self, total: u64) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let from = (self.offset() + 1).min(total);
        let to = (self.offset() + self.size as u64).min(total);
        format!("{from}–{to} of {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page_with_default_size() {
        let req = PageRequest::new();
        assert_eq!(req.page(), 0);
        assert_eq!(req.size(), DEFAULT_PAGE_SIZE);
        assert!(!req.has_prev());
    }

    #[test]
    fn test_rows_expected_full_and_partial_pages() {
        // 12 clients split over pages of 5: 5, 5, 2
        let size = 5;
        assert_eq!(PageRequest::new().with_size(size).rows_expected(12), 5);
        assert_eq!(
            PageRequest::new().with_size(size).with_page(1).rows_expected(12),
            5
        );
        assert_eq!(
            PageRequest::new().with_size(size).with_page(2).rows_expected(12),
            2
        );
        // Out of range
        assert_eq!(
            PageRequest::new().with_size(size).with_page(3).rows_expected(12),
            0
        );
    }

    #[test]
    fn test_changing_size_resets_page() {
        let req = PageRequest::new().with_page(3).with_size(10);
        assert_eq!(req.page(), 0);
        assert_eq!(req.size(), 10);
    }

    #[test]
    fn test_size_outside_options_is_ignored() {
        let req = PageRequest::new().with_page(2).with_size(7);
        assert_eq!(req.page(), 2);
        assert_eq!(req.size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(PageRequest::new().range_label(12), "1–5 of 12");
        assert_eq!(PageRequest::new().with_page(2).range_label(12), "11–12 of 12");
        assert_eq!(PageRequest::new().range_label(0), "0–0 of 0");
        // Fewer rows than one page
        assert_eq!(PageRequest::new().range_label(3), "1–3 of 3");
    }

    #[test]
    fn test_prev_next_gating() {
        let first = PageRequest::new();
        assert!(!first.has_prev());
        assert!(first.has_next(12));

        let last = first.with_page(2);
        assert!(last.has_prev());
        assert!(!last.has_next(12));

        // Exactly one page worth of rows
        assert!(!first.has_next(5));
    }
}
