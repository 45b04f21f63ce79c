//! 連絡先セクションコンポーネント
//!
//! リンクはホバーで少し持ち上げ、離れたら戻す

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use folio_common::{Bilingual, ContactLink, Lang};

fn set_lift(ev: &web_sys::MouseEvent, lifted: bool) {
    let Some(target) = ev.current_target() else {
        return;
    };
    let Ok(el) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let transform = if lifted {
        "translateY(-3px)"
    } else {
        "translateY(0)"
    };
    let _ = el.style().set_property("transform", transform);
}

#[component]
pub fn Contact(label: Bilingual, links: Vec<ContactLink>, lang: RwSignal<Lang>) -> impl IntoView {
    view! {
        <section id="contact" class="section-block">
            <h2>{move || label.text(lang.get()).to_string()}</h2>
            <ul class="contact-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    class="contact-link"
                                    on:mouseenter=move |ev| set_lift(&ev, true)
                                    on:mouseleave=move |ev| set_lift(&ev, false)
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
