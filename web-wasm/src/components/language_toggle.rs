//! 言語切替コンポーネント
//!
//! ボタンには切替先の言語コードを表示する（英語表示中は "FR"）

use leptos::prelude::*;

use folio_common::Lang;

#[component]
pub fn LanguageToggle(lang: RwSignal<Lang>) -> impl IntoView {
    view! {
        <button
            class="lang-toggle"
            on:click=move |_| lang.update(|l| *l = l.toggled())
        >
            {move || lang.get().toggle_code()}
        </button>
    }
}
