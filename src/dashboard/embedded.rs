//! Embedded client assets.

use rust_embed::RustEmbed;

/// Static files for the board UI, bundled into the binary.
#[derive(RustEmbed)]
#[folder = "ui/dist/"]
pub struct Assets;
