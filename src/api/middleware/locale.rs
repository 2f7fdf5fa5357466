//! Request language selection.

use axum::{extract::Request, middleware::Next, response::Response};

use super::query_param;
use crate::i18n::{self, Lang};

/// Scopes the request to the language chosen by the `lang` query parameter.
///
/// Must wrap the access gate so its rejections are localized too.
pub async fn layer(req: Request, next: Next) -> Response {
    let raw = query_param(req.uri(), "lang");
    let lang = Lang::from_query(raw.as_deref());

    i18n::scope(lang, next.run(req)).await
}
