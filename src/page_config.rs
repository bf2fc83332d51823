use tekrok_site_core::SiteConfig;
use web_sys::Document;

/// `<script type="application/json" id="site-config">{ ... }</script>`
pub(crate) const CONFIG_ELEMENT_ID: &str = "site-config";

pub(crate) fn load(document: &Document) -> SiteConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("site config: using defaults", err.to_string());
            SiteConfig::default()
        }
    }
}
