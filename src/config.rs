//! Client Configuration
//!
//! Endpoint and presentation settings, resolved once at startup.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::ItemId;

/// Fallback when neither the build nor the page supplies an origin
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_UPLOADS_PATH: &str = "/uploads";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/1a1d24/FFF?text=No+Image";

/// Characters escaped in an uploads path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme + host (+ port) of the catalog API, no trailing slash
    pub api_base: String,
    pub uploads_path: String,
    pub placeholder_image: String,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            uploads_path: DEFAULT_UPLOADS_PATH.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            log_level: LevelFilter::Info,
        }
    }

    /// Build-time overrides first (`COLLECTION_API_BASE`, `COLLECTION_LOG_LEVEL`),
    /// then the origin the page was served from.
    pub fn from_browser() -> Self {
        let api_base = option_env!("COLLECTION_API_BASE")
            .map(str::to_string)
            .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
            .filter(|base| !base.is_empty() && base != "null")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let mut config = Self::new(&api_base);
        if let Some(level) = option_env!("COLLECTION_LOG_LEVEL").and_then(console_logger::parse_level) {
            config.log_level = level;
        }
        config
    }

    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.api_base)
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/api/items/{}", self.api_base, id)
    }

    /// Image source for a card: the upload when present, otherwise the placeholder.
    pub fn image_src(&self, image_filename: Option<&str>) -> String {
        match image_filename.filter(|f| !f.is_empty()) {
            Some(filename) => format!(
                "{}{}/{}",
                self.api_base,
                self.uploads_path,
                utf8_percent_encode(filename, PATH_SEGMENT)
            ),
            None => self.placeholder_image.clone(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
