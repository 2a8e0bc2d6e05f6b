use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty sheet if it failed to embed.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("main.css").unwrap_or_default())
        .as_str()
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            warn!(path, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let asset = EmbeddedAssets::get(path.trim_start_matches('/')).map(|file| file.data);
    if asset.is_none() {
        warn!(path, "embedded asset not found");
    }
    asset
}
