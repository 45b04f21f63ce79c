//! Folio Common Library
//!
//! Webアプリ(WASM)とネイティブテストで共有される型とロジック

pub mod content;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod scroll;
pub mod types;

pub use content::parse_site_content;
pub use error::{Error, Result};
pub use i18n::Lang;
pub use lightbox::{format_meta, Lightbox};
pub use types::{Bilingual, ContactLink, Hero, Section, SiteContent, WorkItem};
