//! Card image rendering.
//!
//! Images are looked up as `<assets_dir>/<name>.png`. Cards without an
//! asset on disk get a translucent placeholder tile showing the image name.

use std::path::{Path, PathBuf};

use gpui::{div, img, prelude::*, Div, ElementId, Pixels, Stateful};

use cardstack_core::ImageRef;

use crate::theme::Theme;

/// Extension looked up in the assets directory.
const ASSET_EXTENSION: &str = "png";

/// Resolve an image reference to a file on disk.
pub fn resolve_asset(assets_dir: Option<&Path>, image: &ImageRef) -> Option<PathBuf> {
    let path = assets_dir?
        .join(image.name())
        .with_extension(ASSET_EXTENSION);
    path.is_file().then_some(path)
}

/// Render an image tile with the given element id.
///
/// The caller sizes the tile; the image or placeholder fills it.
pub fn card_image(
    id: impl Into<ElementId>,
    image: &ImageRef,
    assets_dir: Option<&Path>,
    radius: Pixels,
    theme: &Theme,
) -> Stateful<Div> {
    let tile = div()
        .id(id)
        .flex_shrink_0()
        .overflow_hidden()
        .rounded(radius);

    match resolve_asset(assets_dir, image) {
        Some(path) => tile.child(img(path).size_full()),
        None => tile
            .bg(theme.image_placeholder)
            .flex()
            .items_center()
            .justify_center()
            .text_color(theme.image_placeholder_text)
            .child(image.name().to_string()),
    }
}
