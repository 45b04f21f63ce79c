//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use folio_common::{parse_site_content, Bilingual, Lang, Lightbox};

use crate::components::{
    about::About,
    contact::Contact,
    header::Header,
    hero::HeroSection,
    lightbox::LightboxModal,
    work_gallery::WorkGallery,
};
use crate::{dom, observer};

/// 埋め込みコンテンツマニフェスト
const SITE_JSON: &str = include_str!("../content/site.json");

/// メインアプリケーションコンポーネント
///
/// モーダルのインデックスと言語フラグの持ち主はここ。
/// 各コンポーネントへはシグナルとして渡す
#[component]
pub fn App() -> impl IntoView {
    let content = match parse_site_content(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            gloo::console::error!(format!("folio: マニフェスト読み込み失敗: {}", e));
            return view! {
                <main class="load-error">
                    <p>"Failed to load site content."</p>
                </main>
            }
            .into_any();
        }
    };
    gloo::console::log!(format!("folio: 起動完了（作品{}件）", content.works.len()));

    // UI状態
    let lang = RwSignal::new(Lang::En);
    let lightbox = RwSignal::new(Lightbox::new(content.works.len()));
    let (active_section, set_active_section) = signal(None::<usize>);
    let (shadow, set_shadow) = signal(false);

    // スクロールスパイ対象のセクションid（文書順）
    let section_ids: Vec<String> = content.sections.iter().map(|s| s.id.clone()).collect();

    let section_label = |id: &str| -> Bilingual {
        content
            .section(id)
            .map(|s| s.label.clone())
            .unwrap_or_default()
    };
    let about_label = section_label("about");
    let work_label = section_label("work");
    let contact_label = section_label("contact");

    // マウント後にwindow/documentレベルのイベントを配線する
    Effect::new(move |_| {
        observer::observe_reveals(".section-block, .work-item");
        dom::attach_scroll_handler(section_ids.clone(), set_shadow, set_active_section);
        dom::attach_key_handler(lightbox);
    });

    view! {
        <Header
            title=content.title.clone()
            sections=content.sections.clone()
            lang=lang
            active_section=active_section
            set_active_section=set_active_section
            shadow=shadow
        />
        <main>
            <HeroSection hero=content.hero.clone() lang=lang />
            <About label=about_label paragraphs=content.about.clone() lang=lang />
            <WorkGallery
                label=work_label
                works=content.works.clone()
                lang=lang
                lightbox=lightbox
            />
            <Contact label=contact_label links=content.contacts.clone() lang=lang />
        </main>
        <LightboxModal works=content.works lightbox=lightbox />
    }
    .into_any()
}
