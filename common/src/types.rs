//! サイトコンテンツの型定義
//!
//! コンテンツマニフェスト(JSON)からデシリアライズされる型:
//! - Bilingual: 英仏2言語テキスト
//! - WorkItem: 作品1件分
//! - SiteContent: サイト全体のマニフェスト

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// 英仏2言語テキスト
///
/// 仏語が無い場合は英語テキストにフォールバックする。英語は必須
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bilingual {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: Some(fr.into()),
        }
    }

    /// 指定言語のテキスト
    pub fn text(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Fr => self.fr.as_deref().unwrap_or(&self.en),
        }
    }
}

/// 作品アイテム
///
/// マニフェスト内の並び順が表示順。年は "2023–2024" のような
/// 範囲表記を許すため文字列のまま持つ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkItem {
    pub title: String,
    pub medium: String,
    pub year: String,
    pub image: String,
    pub caption: Bilingual,
}

/// ナビゲーション対象のセクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    pub id: String,
    pub label: Bilingual,
}

/// ヒーローセクションの文言
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub heading: String,
    pub tagline: Bilingual,
}

/// 連絡先リンク
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// サイト全体のコンテンツマニフェスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub title: String,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub about: Vec<Bilingual>,
    pub works: Vec<WorkItem>,
    pub contacts: Vec<ContactLink>,
}

impl SiteContent {
    /// idからナビゲーションセクションを引く
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
