use std::num::NonZeroUsize;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Page {requested} is out of range 1..={total_pages}")]
    OutOfRange { requested: usize, total_pages: usize },
}

pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// The window of `items` shown on `current_page` (1-based).
pub fn page<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> (&[T], usize) {
    let total = total_pages(items.len(), page_size);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size.get())
        .min(items.len());
    let end = start.saturating_add(page_size.get()).min(items.len());
    (&items[start..end], total)
}

/// Current page of a filtered result, always within `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: NonZeroUsize,
    current_page: usize,
    total_pages: usize,
}

impl Pagination {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Called whenever the filtered set changes.
    pub fn reset(&mut self, filtered_len: usize) {
        self.total_pages = total_pages(filtered_len, self.page_size);
        self.current_page = 1;
    }

    pub fn set_page(&mut self, requested: usize) -> Result<(), PageError> {
        if requested == 0 || requested > self.total_pages {
            return Err(PageError::OutOfRange {
                requested,
                total_pages: self.total_pages,
            });
        }
        self.current_page = requested;
        Ok(())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_size, self.current_page).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_six_rows_in_pages_of_five() {
        let rows: Vec<u32> = (1..=6).collect();
        let (first, total) = page(&rows, size(5), 1);
        assert_eq!(total, 2);
        assert_eq!(first, &[1, 2, 3, 4, 5]);

        let (second, _) = page(&rows, size(5), 2);
        assert_eq!(second, &[6]);
    }

    #[test]
    fn test_empty_input_has_one_empty_page() {
        let rows: Vec<u32> = Vec::new();
        let (visible, total) = page(&rows, size(5), 1);
        assert_eq!(total, 1);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(10, size(5)), 2);
        assert_eq!(total_pages(11, size(5)), 3);
        assert_eq!(total_pages(0, size(1)), 1);
    }

    #[test]
    fn test_out_of_range_requests_are_rejected() {
        let rows: Vec<u32> = (1..=6).collect();
        let mut pagination = Pagination::new(size(5));
        pagination.reset(rows.len());
        pagination.set_page(2).unwrap();
        let before = pagination.slice(&rows).to_vec();

        for requested in [0, pagination.total_pages() + 1] {
            let err = pagination.set_page(requested).unwrap_err();
            assert_eq!(
                err,
                PageError::OutOfRange {
                    requested,
                    total_pages: 2
                }
            );
            assert_eq!(pagination.current_page(), 2);
            assert_eq!(pagination.slice(&rows), before.as_slice());
        }
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pagination = Pagination::new(size(2));
        pagination.reset(5);
        pagination.set_page(3).unwrap();
        assert!(!pagination.has_next());

        pagination.reset(1);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), 1);
        assert!(!pagination.has_previous());
    }
}
