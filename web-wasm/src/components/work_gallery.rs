//! 作品ギャラリーコンポーネント
//!
//! 作品クリックでライトボックスを開く。出現の時間差は
//! スタイルシート側(nth-child)で付けるため、ここでは遅延を持たない

use leptos::prelude::*;

use folio_common::{Bilingual, Lang, Lightbox, WorkItem};

#[component]
pub fn WorkGallery(
    label: Bilingual,
    works: Vec<WorkItem>,
    lang: RwSignal<Lang>,
    lightbox: RwSignal<Lightbox>,
) -> impl IntoView {
    view! {
        <section id="work" class="section-block">
            <h2>{move || label.text(lang.get()).to_string()}</h2>
            <div class="work-grid">
                <For
                    each=move || works.clone().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(i, work): (usize, WorkItem)| {
                        let caption = work.caption.clone();
                        view! {
                            <figure
                                class="work-item"
                                on:click=move |_| lightbox.update(|lb| lb.open(i))
                            >
                                <img src=work.image.clone() alt=work.title.clone() loading="lazy" />
                                <figcaption>
                                    <h3>{work.title.clone()}</h3>
                                    <p class="work-caption">
                                        {move || caption.text(lang.get()).to_string()}
                                    </p>
                                </figcaption>
                            </figure>
                        }
                    }
                />
            </div>
        </section>
    }
}
