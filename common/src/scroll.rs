//! スクロール関連の純粋計算
//!
//! ヘッダー影・スクロールスパイ・ナビゲーション先オフセットの計算。
//! DOM側(web-wasm)は毎スクロールイベントでこれらを呼ぶ

/// ヘッダーに影を付けるスクロール量の閾値(px)
pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;

/// スクロールスパイがセクション上端の手前に取る余白(px)
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// 影の有無。閾値ちょうどでは付かない
pub fn header_shadow(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

/// セクションの縦方向の帯（文書座標系）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBand {
    pub top: f64,
    pub height: f64,
}

/// 現在のスクロール位置が属するセクションの添字
///
/// 各帯は `[top - header_height - 100, top - header_height - 100 + height)`。
/// 帯が重なる場合は文書順で最後のセクションが勝つ
pub fn active_section(
    scroll_y: f64,
    header_height: f64,
    bands: &[SectionBand],
) -> Option<usize> {
    let mut active = None;
    for (i, band) in bands.iter().enumerate() {
        let start = band.top - header_height - SCROLL_SPY_OFFSET;
        if scroll_y >= start && scroll_y < start + band.height {
            active = Some(i);
        }
    }
    active
}

/// ナビゲーションクリック時のスクロール先（固定ヘッダー分を引く）
pub fn nav_target_offset(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}
