//! 言語切替
//!
//! 英語・仏語の2状態のみを扱う。永続化はしない

use serde::{Deserialize, Serialize};

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    /// 言語コード
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// コードから言語を判定
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "fr" | "fr-fr" | "fr-ca" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// もう一方の言語
    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }

    /// 切替ボタンに表示するラベル（切替先の言語コード、大文字）
    pub fn toggle_code(self) -> &'static str {
        match self {
            Lang::En => "FR",
            Lang::Fr => "EN",
        }
    }
}
