//! ヒーローセクションコンポーネント
//!
//! 出現アニメーションの対象外（最初から表示）

use leptos::prelude::*;

use folio_common::{Hero, Lang};

#[component]
pub fn HeroSection(hero: Hero, lang: RwSignal<Lang>) -> impl IntoView {
    let tagline = hero.tagline;
    view! {
        <section id="top" class="hero">
            <h1>{hero.heading}</h1>
            <p class="tagline">{move || tagline.text(lang.get()).to_string()}</p>
        </section>
    }
}
