//! Response envelopes shared by every endpoint.
//!
//! Success and error responses alike serialize as `{code, msg, data}`. The
//! `msg` is translated into the request language.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::pagination::Page;
use crate::i18n;

/// `{code, msg, data}` response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub msg: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 envelope with the localized `success` message.
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            msg: i18n::translate("success").to_string(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// `data` payload of a paginated listing.
#[derive(Debug, Serialize)]
pub struct PaginatedData<T> {
    pub total_records: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub page_size: u32,
    pub lists: Vec<T>,
}

impl<T, U: From<T>> From<Page<T>> for PaginatedData<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            total_records: page.total_records,
            total_pages: page.total_pages,
            current_page: page.page,
            page_size: page.page_size,
            lists: page.rows.into_iter().map(U::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::PageRequest;
    use crate::i18n::Lang;

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(Envelope::success(vec![1, 2])).unwrap();

        assert_eq!(value["code"], 200);
        assert_eq!(value["msg"], "Success");
        assert_eq!(value["data"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn test_success_message_is_localized() {
        let envelope = i18n::scope(Lang::Khmer, async { Envelope::success(()) }).await;

        assert_eq!(envelope.msg, i18n::translate_in(Lang::Khmer, "success"));
        assert_ne!(envelope.msg, "Success");
    }

    #[test]
    fn test_paginated_data_from_page() {
        let page = Page::new(vec![1_i64, 2, 3], 23, PageRequest::new(3, 10).unwrap());
        let data: PaginatedData<i64> = page.into();

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["total_records"], 23);
        assert_eq!(value["total_pages"], 3);
        assert_eq!(value["current_page"], 3);
        assert_eq!(value["page_size"], 10);
        assert_eq!(value["lists"], serde_json::json!([1, 2, 3]));
    }
}
