//! ヘッダーコンポーネント
//!
//! 固定ヘッダー。ナビゲーションリンクのスムーズスクロールと
//! アクティブ表示、スクロール時の影、言語切替ボタンを持つ

use leptos::prelude::*;

use folio_common::{Lang, Section};

use crate::components::language_toggle::LanguageToggle;
use crate::dom;

#[component]
pub fn Header(
    title: String,
    sections: Vec<Section>,
    lang: RwSignal<Lang>,
    active_section: ReadSignal<Option<usize>>,
    set_active_section: WriteSignal<Option<usize>>,
    shadow: ReadSignal<bool>,
) -> impl IntoView {
    let links = sections
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let id = section.id.clone();
            let label = section.label.clone();
            view! {
                <a
                    href=format!("#{}", section.id)
                    class:active=move || active_section.get() == Some(i)
                    on:click=move |ev| {
                        ev.prevent_default();
                        // セクションが無ければスクロールもアクティブ更新もしない
                        if dom::scroll_to_section(&id) {
                            set_active_section.set(Some(i));
                        }
                    }
                >
                    {move || label.text(lang.get()).to_string()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="site-header" class:scrolled=move || shadow.get()>
            <span class="brand">{title}</span>
            <nav class="site-nav">{links}</nav>
            <LanguageToggle lang=lang />
        </header>
    }
}
