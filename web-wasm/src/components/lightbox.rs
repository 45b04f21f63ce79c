//! ライトボックス（モーダル）コンポーネント
//!
//! 状態機械本体は folio-common 側。ここでは表示と操作の配線のみ。
//! 閉じても直前の作品を表示したまま残し、クラスだけで隠す

use leptos::prelude::*;

use folio_common::{format_meta, Lightbox, WorkItem};

#[component]
pub fn LightboxModal(works: Vec<WorkItem>, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let works = StoredValue::new(works);
    let current = move || works.with_value(|w| w.get(lightbox.get().index()).cloned());
    let is_open = move || lightbox.get().is_open();

    view! {
        <div class="lightbox" class:active=is_open>
            <button
                class="lightbox-close"
                on:click=move |_| lightbox.update(|lb| lb.close())
            >
                "×"
            </button>
            <button
                class="lightbox-prev"
                on:click=move |_| lightbox.update(|lb| lb.prev())
            >
                "‹"
            </button>
            <figure class="lightbox-stage">
                // 画像の左右半分は前後移動の透明クリックゾーン
                <div
                    class="lightbox-zone left"
                    on:click=move |_| lightbox.update(|lb| lb.prev())
                ></div>
                <div
                    class="lightbox-zone right"
                    on:click=move |_| lightbox.update(|lb| lb.next())
                ></div>
                {move || {
                    current()
                        .map(|work| {
                            view! {
                                <img src=work.image.clone() alt=work.title.clone() />
                                <figcaption>
                                    <h3 class="lightbox-title">{work.title.clone()}</h3>
                                    <p class="lightbox-meta">
                                        {format_meta(&work.medium, &work.year)}
                                    </p>
                                </figcaption>
                            }
                        })
                }}
            </figure>
            <button
                class="lightbox-next"
                on:click=move |_| lightbox.update(|lb| lb.next())
            >
                "›"
            </button>
        </div>
    }
}
