//! コンテンツマニフェストのパース
//!
//! 埋め込みJSONを SiteContent にパースし、最低限の整合性を検証する

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::SiteContent;

/// マニフェストJSONをパースして検証する
///
/// 検証内容:
/// - セクションIDは空でなく、重複しない
/// - 作品はタイトルと画像パスを持つ
///
/// 作品が0件のマニフェストは有効（ライトボックスは無効化される）
pub fn parse_site_content(json: &str) -> Result<SiteContent> {
    let content: SiteContent = serde_json::from_str(json)?;
    validate(&content)?;
    Ok(content)
}

fn validate(content: &SiteContent) -> Result<()> {
    let mut seen = HashSet::new();
    for section in &content.sections {
        if section.id.is_empty() {
            return Err(Error::Content("セクションIDが空です".to_string()));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(Error::Content(format!(
                "セクションIDが重複しています: {}",
                section.id
            )));
        }
    }

    for (i, work) in content.works.iter().enumerate() {
        if work.title.is_empty() {
            return Err(Error::Content(format!("作品{}のタイトルが空です", i)));
        }
        if work.image.is_empty() {
            return Err(Error::Content(format!(
                "作品「{}」の画像パスが空です",
                work.title
            )));
        }
    }

    Ok(())
}
