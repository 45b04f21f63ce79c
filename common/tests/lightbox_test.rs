//! ライトボックスのシナリオテスト
//!
//! キーボード操作・巡回・メタ表示を作品リストと組み合わせて検証する

use folio_common::{format_meta, parse_site_content, Lightbox, WorkItem};

fn five_works() -> Vec<WorkItem> {
    (1..=5)
        .map(|i| WorkItem {
            title: format!("Piece {}", i),
            medium: "Oil on canvas".to_string(),
            year: format!("202{}", i),
            image: format!("images/piece-{}.jpg", i),
            ..Default::default()
        })
        .collect()
}

/// 作品5件・index 0 で開いて左矢印 → 末尾(4)に巡回し、表示内容も作品4のもの
#[test]
fn test_open_first_then_arrow_left_wraps() {
    let works = five_works();
    let mut lb = Lightbox::new(works.len());

    lb.open(0);
    lb.prev();

    let i = lb.current().expect("モーダルは開いたまま");
    assert_eq!(i, 4);
    let work = &works[i];
    assert_eq!(work.title, "Piece 5");
    assert_eq!(work.image, "images/piece-5.jpg");
    assert_eq!(
        format_meta(&work.medium, &work.year),
        "Oil on canvas — 2025"
    );
}

/// どのインデックスから開いても prev→next で元に戻る
#[test]
fn test_prev_next_round_trip_all_indices() {
    let works = five_works();
    for i in 0..works.len() {
        let mut lb = Lightbox::new(works.len());
        lb.open(i);
        lb.prev();
        lb.next();
        assert_eq!(lb.current(), Some(i));
    }
}

/// N回 next で一周して元の作品に戻る
#[test]
fn test_full_cycle() {
    let works = five_works();
    let mut lb = Lightbox::new(works.len());
    lb.open(3);
    for _ in 0..works.len() {
        lb.next();
    }
    assert_eq!(lb.current(), Some(3));
}

/// 閉じた後の矢印キー相当の操作は無視される
#[test]
fn test_keys_ignored_while_closed() {
    let mut lb = Lightbox::new(5);
    lb.open(1);
    lb.close();
    lb.prev();
    lb.next();
    assert!(!lb.is_open());
    assert_eq!(lb.index(), 1);
}

/// 作品0件のマニフェストではライトボックスが完全に無効になる
#[test]
fn test_empty_manifest_disables_lightbox() {
    let json = r#"{
        "title": "Empty",
        "hero": {"heading": "Empty", "tagline": {"en": "No works yet"}},
        "sections": [],
        "about": [],
        "works": [],
        "contacts": []
    }"#;
    let content = parse_site_content(json).unwrap();
    let mut lb = Lightbox::new(content.works.len());

    lb.open(0);
    lb.next();
    lb.prev();
    assert!(!lb.is_open());
    assert_eq!(lb.current(), None);
}

/// メタ行はちょうど "medium — year" の形式
#[test]
fn test_meta_format_exact() {
    assert_eq!(format_meta("Gouache", "2022"), "Gouache — 2022");
}
