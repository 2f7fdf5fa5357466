//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::pagination::PageRequest;
use crate::error::AppError;

/// `page` / `page_size` query parameters.
///
/// Empty values (`?page=`) count as absent and fall back to the defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters into a [`PageRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `page_size` is out
    /// of range.
    pub fn to_request(&self) -> Result<PageRequest, AppError> {
        PageRequest::from_optional(self.page, self.page_size)
    }
}
