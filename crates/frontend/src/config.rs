//! Frontend configuration

use folio_core::SiteConfig;
use std::rc::Rc;
use tracing::warn;
use yew::prelude::*;

/// `site.toml`, embedded at build time
const SITE_TOML: &str = include_str!("../site.toml");

/// Load the embedded configuration, falling back to defaults if it is invalid
pub fn load() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_TOML).unwrap_or_else(|err| {
        warn!(error = %err, "Invalid site.toml, using default configuration");
        SiteConfig::default()
    })
}

/// Configuration context
pub type ConfigContext = Rc<SiteConfig>;

/// Hook to read the site configuration
#[hook]
pub fn use_site_config() -> ConfigContext {
    use_context::<ConfigContext>().unwrap_or_default()
}
