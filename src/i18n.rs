//! Message translation for response envelopes.
//!
//! The language is selected per request from the `lang` query parameter
//! (`0` English, `1` Khmer, `2` Chinese) and stored in a task-local by
//! [`crate::api::middleware::locale`]. Code running inside the request
//! (handlers, error conversion) reads it through [`translate`].

use std::future::Future;

/// Supported response languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    English,
    Khmer,
    Chinese,
}

impl Lang {
    /// Maps a numeric language index. Anything outside `0..=2` falls back to English.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => Lang::Khmer,
            2 => Lang::Chinese,
            _ => Lang::English,
        }
    }

    /// Parses the raw `lang` query value. Missing or unparsable values yield English.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .map(Self::from_index)
            .unwrap_or_default()
    }

    fn column(self) -> usize {
        match self {
            Lang::English => 0,
            Lang::Khmer => 1,
            Lang::Chinese => 2,
        }
    }
}

tokio::task_local! {
    static CURRENT_LANG: Lang;
}

/// Runs `fut` with `lang` as the current request language.
pub async fn scope<F: Future>(lang: Lang, fut: F) -> F::Output {
    CURRENT_LANG.scope(lang, fut).await
}

/// Language of the current request, English outside a request scope.
pub fn current() -> Lang {
    CURRENT_LANG.try_with(|lang| *lang).unwrap_or_default()
}

/// Translates `key` into the current request language.
pub fn translate(key: &'static str) -> &'static str {
    translate_in(current(), key)
}

/// Translates `key` into `lang`. Unknown keys are returned unchanged.
pub fn translate_in(lang: Lang, key: &'static str) -> &'static str {
    MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, texts)| texts[lang.column()])
        .unwrap_or(key)
}

const MESSAGES: &[(&str, [&str; 3])] = &[
    ("success", ["Success", "ជោគជ័យ", "成功"]),
    ("fail", ["Failed", "បរាជ័យ", "失败"]),
    (
        "server_error",
        ["Internal server error", "កំហុសម៉ាស៊ីនមេ", "服务器内部错误"],
    ),
    (
        "app_token_required",
        ["App token is required", "តម្រូវឱ្យមាន App token", "需要应用令牌"],
    ),
    (
        "invalid_token",
        ["Invalid token", "Token មិនត្រឹមត្រូវ", "无效的令牌"],
    ),
    (
        "unauthorized_access",
        [
            "You do not have permission to access this resource",
            "អ្នកមិនមានសិទ្ធិចូលប្រើធនធាននេះទេ",
            "您无权访问此资源",
        ],
    ),
    (
        "invalid_credentials",
        [
            "Invalid username or password",
            "ឈ្មោះអ្នកប្រើ ឬពាក្យសម្ងាត់មិនត្រឹមត្រូវ",
            "用户名或密码无效",
        ],
    ),
    (
        "validation_error",
        ["Invalid request", "សំណើមិនត្រឹមត្រូវ", "无效请求"],
    ),
    (
        "not_found",
        ["Record not found", "រកមិនឃើញទិន្នន័យ", "未找到记录"],
    ),
    (
        "conflict",
        ["Record already exists", "ទិន្នន័យមានរួចហើយ", "记录已存在"],
    ),
    (
        "too_many_requests",
        [
            "Too many requests, please try again later",
            "សំណើច្រើនពេក សូមព្យាយាមម្តងទៀតនៅពេលក្រោយ",
            "请求过于频繁，请稍后再试",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_fallback() {
        assert_eq!(Lang::from_index(0), Lang::English);
        assert_eq!(Lang::from_index(1), Lang::Khmer);
        assert_eq!(Lang::from_index(2), Lang::Chinese);
        assert_eq!(Lang::from_index(3), Lang::English);
        assert_eq!(Lang::from_index(-1), Lang::English);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(Lang::from_query(None), Lang::English);
        assert_eq!(Lang::from_query(Some("2")), Lang::Chinese);
        assert_eq!(Lang::from_query(Some("khmer")), Lang::English);
        assert_eq!(Lang::from_query(Some("")), Lang::English);
    }

    #[test]
    fn test_translate_in() {
        assert_eq!(translate_in(Lang::English, "success"), "Success");
        assert_eq!(translate_in(Lang::Chinese, "invalid_token"), "无效的令牌");
        assert_eq!(translate_in(Lang::Khmer, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_current_defaults_to_english_outside_scope() {
        assert_eq!(current(), Lang::English);
        assert_eq!(translate("fail"), "Failed");
    }

    #[tokio::test]
    async fn test_scope_sets_current_language() {
        let msg = scope(Lang::Khmer, async { translate("success") }).await;
        assert_eq!(msg, "ជោគជ័យ");
        assert_eq!(current(), Lang::English);
    }
}
