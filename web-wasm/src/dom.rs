//! DOMユーティリティとwindow/documentレベルのイベント配線
//!
//! 要素が見つからない場合はすべてno-opに落とす。リスナーは
//! ページと同寿命なので `Closure::forget` で保持する

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use folio_common::scroll::{self, SectionBand};
use folio_common::Lightbox;

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// 固定ヘッダーの表示高さ(px)。ヘッダーが無ければ0
fn header_height(document: &Document) -> f64 {
    document
        .query_selector("header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// 指定セクションへスムーズスクロールする
///
/// セクションが存在しなければ何もせず false を返す
pub fn scroll_to_section(id: &str) -> bool {
    let Some(doc) = document() else {
        return false;
    };
    let Some(el) = doc.get_element_by_id(id) else {
        return false;
    };
    let Ok(el) = el.dyn_into::<HtmlElement>() else {
        return false;
    };

    let target = scroll::nav_target_offset(f64::from(el.offset_top()), header_height(&doc));
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(target);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
    true
}

/// スクロールイベントの配線（ヘッダー影 + スクロールスパイ）
///
/// セクションの帯は毎イベント再計算する。画像ロードで
/// レイアウトが動くため、オフセットはキャッシュしない
pub fn attach_scroll_handler(
    section_ids: Vec<String>,
    set_shadow: WriteSignal<bool>,
    set_active: WriteSignal<Option<usize>>,
) {
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = window() else {
            return;
        };
        let Some(doc) = win.document() else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        set_shadow.set(scroll::header_shadow(scroll_y));

        let header_h = header_height(&doc);
        let mut indices = Vec::with_capacity(section_ids.len());
        let mut bands = Vec::with_capacity(section_ids.len());
        for (i, id) in section_ids.iter().enumerate() {
            let Some(el) = doc
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            indices.push(i);
            bands.push(SectionBand {
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            });
        }
        let active = scroll::active_section(scroll_y, header_h, &bands).map(|pos| indices[pos]);
        set_active.set(active);
    });

    let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// キーボード操作の配線
///
/// モーダルが開いている間のみ矢印キーとEscapeに反応する
pub fn attach_key_handler(lightbox: RwSignal<Lightbox>) {
    let Some(doc) = document() else {
        return;
    };

    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if !lightbox.get_untracked().is_open() {
            return;
        }
        match ev.key().as_str() {
            "ArrowLeft" => lightbox.update(|lb| lb.prev()),
            "ArrowRight" => lightbox.update(|lb| lb.next()),
            "Escape" => lightbox.update(|lb| lb.close()),
            _ => {}
        }
    });

    let _ = doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
