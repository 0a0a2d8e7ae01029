//! API language resolution
//!
//! The site's locale descriptors carry both a UI code and, optionally, a
//! distinct code understood by the API. When neither is usable the API
//! falls back to Russian, the studio's original content language.

use serde::{Deserialize, Serialize};

/// Language requested from the API when no locale is selected.
pub const FALLBACK_LANG: &str = "ru";

/// A selectable site locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// UI locale code, e.g. `"en"`.
    pub code: String,
    /// API language override when it differs from the UI code.
    #[serde(default)]
    pub api_lang: Option<String>,
}

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            api_lang: None,
        }
    }

    pub fn with_api_lang(mut self, api_lang: impl Into<String>) -> Self {
        self.api_lang = Some(api_lang.into());
        self
    }
}

/// Resolve the API language for the current locale, if any.
///
/// Preference order: explicit `api_lang`, then the locale code, then
/// [`FALLBACK_LANG`]. Empty strings are treated as absent.
pub fn resolve_api_language(locale: Option<&Locale>) -> String {
    let Some(locale) = locale else {
        return FALLBACK_LANG.to_string();
    };

    locale
        .api_lang
        .as_deref()
        .filter(|lang| !lang.is_empty())
        .or(Some(locale.code.as_str()))
        .filter(|lang| !lang.is_empty())
        .unwrap_or(FALLBACK_LANG)
        .to_string()
}
