//! 出現アニメーションの配線
//!
//! IntersectionObserverで対象要素を監視し、交差したら
//! fade-inクラスを1度だけ付けて監視を解除する

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// 交差率の閾値
const THRESHOLD: f64 = 0.15;

/// ビューポート下端を50px縮めるマージン
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// セレクタに一致する全要素に出現アニメーションを配線する
///
/// 一致する要素が無ければ何もしない
pub fn observe_reveals(selector: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("fade-in");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<Element>() {
            observer.observe(&el);
        }
    }
    callback.forget();
}
