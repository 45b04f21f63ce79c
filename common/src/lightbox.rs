//! ライトボックスの状態機械
//!
//! 現在インデックスと開閉状態を1か所で持つ。前後移動は
//! モジュロ演算で巡回し、作品0件のときは全操作がno-opになる

/// ライトボックスの状態機械
///
/// `close()` してもインデックスは保持される（再表示時は直前の作品から）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    count: usize,
    index: usize,
    open: bool,
}

impl Lightbox {
    /// 作品数を固定して閉じた状態で作る
    pub fn new(count: usize) -> Self {
        Self {
            count,
            index: 0,
            open: false,
        }
    }

    /// 指定インデックスの作品で開く。範囲外は無視
    pub fn open(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.index = index;
        self.open = true;
    }

    /// 閉じる。インデックスはそのまま
    pub fn close(&mut self) {
        self.open = false;
    }

    /// 前の作品へ（先頭からは末尾へ巡回）。閉じている間はno-op
    pub fn prev(&mut self) {
        if !self.open || self.count == 0 {
            return;
        }
        self.index = (self.index + self.count - 1) % self.count;
    }

    /// 次の作品へ（末尾からは先頭へ巡回）。閉じている間はno-op
    pub fn next(&mut self) {
        if !self.open || self.count == 0 {
            return;
        }
        self.index = (self.index + 1) % self.count;
    }

    /// 開いていれば現在のインデックス
    pub fn current(&self) -> Option<usize> {
        self.open.then_some(self.index)
    }

    /// 直近に表示した作品のインデックス（閉じていても返す）
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// メタ情報行のフォーマット（例: "Oil on canvas — 2023"）
pub fn format_meta(medium: &str, year: &str) -> String {
    format!("{} — {}", medium, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_closed() {
        let lb = Lightbox::new(5);
        assert!(!lb.is_open());
        assert_eq!(lb.current(), None);
        assert_eq!(lb.count(), 5);
    }

    #[test]
    fn test_open_sets_index() {
        let mut lb = Lightbox::new(5);
        lb.open(2);
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let mut lb = Lightbox::new(3);
        lb.open(3);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_close_keeps_index() {
        // 閉じてもインデックスは保持される
        let mut lb = Lightbox::new(5);
        lb.open(3);
        lb.close();
        assert_eq!(lb.current(), None);
        assert_eq!(lb.index(), 3);
    }

    #[test]
    fn test_prev_wraps_from_first() {
        // 先頭で「前へ」→ 末尾に巡回
        let mut lb = Lightbox::new(5);
        lb.open(0);
        lb.prev();
        assert_eq!(lb.current(), Some(4));
    }

    #[test]
    fn test_next_wraps_from_last() {
        let mut lb = Lightbox::new(5);
        lb.open(4);
        lb.next();
        assert_eq!(lb.current(), Some(0));
    }

    #[test]
    fn test_prev_then_next_round_trip() {
        for i in 0..5 {
            let mut lb = Lightbox::new(5);
            lb.open(i);
            lb.prev();
            lb.next();
            assert_eq!(lb.current(), Some(i));
        }
    }

    #[test]
    fn test_next_n_times_cycles() {
        // N回「次へ」で元の作品に戻る
        let mut lb = Lightbox::new(4);
        lb.open(2);
        for _ in 0..4 {
            lb.next();
        }
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn test_nav_while_closed_is_noop() {
        let mut lb = Lightbox::new(5);
        lb.open(2);
        lb.close();
        lb.prev();
        lb.next();
        assert_eq!(lb.index(), 2);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_zero_items_all_noop() {
        // 作品0件: 開閉も前後移動もすべてno-op
        let mut lb = Lightbox::new(0);
        lb.open(0);
        assert!(!lb.is_open());
        lb.prev();
        lb.next();
        lb.close();
        assert_eq!(lb.current(), None);
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn test_format_meta() {
        assert_eq!(format_meta("Oil on canvas", "2023"), "Oil on canvas — 2023");
        assert_eq!(format_meta("Ink", "2023–2024"), "Ink — 2023–2024");
    }
}
