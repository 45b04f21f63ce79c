//! 紹介セクションコンポーネント

use leptos::prelude::*;

use folio_common::{Bilingual, Lang};

#[component]
pub fn About(label: Bilingual, paragraphs: Vec<Bilingual>, lang: RwSignal<Lang>) -> impl IntoView {
    view! {
        <section id="about" class="section-block">
            <h2>{move || label.text(lang.get()).to_string()}</h2>
            {paragraphs
                .into_iter()
                .map(|paragraph| {
                    view! { <p>{move || paragraph.text(lang.get()).to_string()}</p> }
                })
                .collect_view()}
        </section>
    }
}
