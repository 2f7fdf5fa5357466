//! Page requests and paginated results.
//!
//! Both SQL pagination variants in
//! [`crate::infrastructure::persistence::pagination`] produce a [`Page`] from a
//! validated [`PageRequest`].

use serde_json::json;

use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A validated 1-based page request.
///
/// `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE` always hold, so offset
/// computation and the page count division are well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `page_size` is
    /// outside `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, page_size: u32) -> Result<Self, AppError> {
        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        Ok(Self { page, page_size })
    }

    /// Builds a request from optional query values, using the defaults for
    /// missing ones.
    pub fn from_optional(page: Option<u32>, page_size: Option<u32>) -> Result<Self, AppError> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Row offset of the first row on this page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `ceil(total_records / page_size)`, 0 when there are no records.
pub fn total_pages(total_records: i64, page_size: u32) -> i64 {
    if total_records <= 0 {
        return 0;
    }
    let size = i64::from(page_size.max(1));
    (total_records + size - 1) / size
}

/// One page of rows plus the totals of the underlying query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_records: i64,
    pub total_pages: i64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, total_records: i64, request: PageRequest) -> Self {
        Self {
            rows,
            total_records,
            total_pages: total_pages(total_records, request.page_size()),
            page: request.page(),
            page_size: request.page_size(),
        }
    }

    /// Converts every row, keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            total_records: self.total_records,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Applies a request to an in-memory data set the same way the SQL
    /// variants apply `OFFSET`/`LIMIT` after ordering by id.
    fn page_of(data: &[i64], request: PageRequest) -> Page<i64> {
        let rows = data
            .iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .copied()
            .collect();
        Page::new(rows, data.len() as i64, request)
    }

    fn ninety_five() -> Vec<i64> {
        (1..=95).collect()
    }

    #[test]
    fn test_first_page() {
        let page = page_of(&ninety_five(), PageRequest::new(1, 10).unwrap());

        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.rows[0], 1);
        assert_eq!(page.total_records, 95);
        assert_eq!(page.total_pages, 10);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let page = page_of(&ninety_five(), PageRequest::new(10, 10).unwrap());

        assert_eq!(page.rows, vec![91, 92, 93, 94, 95]);
        assert_eq!(page.total_pages, 10);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = page_of(&ninety_five(), PageRequest::new(11, 10).unwrap());

        assert!(page.rows.is_empty());
        assert_eq!(page.total_records, 95);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(PageRequest::new(1, 25).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 50).unwrap().offset(), 100);
        assert_eq!(PageRequest::new(3, 50).unwrap().limit(), 50);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_zero_page_is_rejected() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 1).is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_optional(None, None).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_map_keeps_totals() {
        let page = page_of(&ninety_five(), PageRequest::new(2, 10).unwrap()).map(|n| n * 2);

        assert_eq!(page.rows[0], 22);
        assert_eq!(page.total_records, 95);
        assert_eq!(page.page, 2);
    }
}
