// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use usvg::fontdb;

use crate::{Config, RasterError};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renders SVG files into square pixmaps.
///
/// System fonts are loaded on the first source that has text
/// and are reused by all following renders.
pub struct Rasterizer {
    fonts: OnceCell<fontdb::Database>,
    no_fonts: fontdb::Database,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("fonts_loaded", &self.fonts.get().is_some())
            .finish()
    }
}

impl Rasterizer {
    /// Creates a new rasterizer.
    pub fn new() -> Self {
        Rasterizer {
            fonts: OnceCell::new(),
            no_fonts: fontdb::Database::new(),
        }
    }

    /// Renders `source` into a `size`x`size` pixmap.
    ///
    /// The image is scaled uniformly and centered. Uncovered pixels stay transparent.
    pub fn render(&self, source: &Path, size: u32) -> Result<tiny_skia::Pixmap, RasterError> {
        let mut svg_data = std::fs::read(source).map_err(RasterError::Read)?;
        if svg_data.starts_with(&[0x1f, 0x8b]) {
            svg_data = usvg::decompress_svgz(&svg_data)?;
        }

        let svg_string = std::str::from_utf8(&svg_data).map_err(|_| usvg::Error::NotAnUtf8Str)?;

        let xml_opt = usvg::roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let xml_tree = usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
            .map_err(usvg::Error::ParsingFailed)?;

        // fontdb initialization is pretty expensive, so perform it only when needed.
        let has_text_nodes = xml_tree
            .descendants()
            .any(|n| n.has_tag_name((SVG_NS, "text")));
        let fontdb = if has_text_nodes {
            self.fonts.get_or_init(load_fonts)
        } else {
            &self.no_fonts
        };

        let mut opt = usvg::Options::default();
        opt.resources_dir = resources_dir(source);

        let tree = usvg::Tree::from_xmltree(&xml_tree, &opt, fontdb)?;

        if !Config::is_valid_size(size) {
            return Err(RasterError::InvalidSize(size));
        }

        let mut pixmap =
            tiny_skia::Pixmap::new(size, size).ok_or(RasterError::InvalidSize(size))?;
        let ts = fit_transform(tree.size(), size);
        resvg::render(&tree, ts, &mut pixmap.as_mut());

        log::debug!(
            "Rendered '{}' ({}x{}) at {}px.",
            source.display(),
            tree.size().width(),
            tree.size().height(),
            size
        );

        Ok(pixmap)
    }

    /// Renders `source` and encodes the result as PNG.
    pub fn render_png(&self, source: &Path, size: u32) -> Result<Vec<u8>, RasterError> {
        let pixmap = self.render(source, size)?;
        pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}

fn load_fonts() -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    log::debug!("Loaded {} font faces.", fontdb.len());
    fontdb
}

/// Returns the absolute directory of the source, so relative `href`s can be resolved.
fn resources_dir(source: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(source)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Fits `svg_size` into a `size`x`size` square, keeping the aspect ratio.
fn fit_transform(svg_size: usvg::Size, size: u32) -> tiny_skia::Transform {
    let side = size as f32;
    let scale = (side / svg_size.width()).min(side / svg_size.height());
    let tx = (side - svg_size.width() * scale) / 2.0;
    let ty = (side - svg_size.height() * scale) / 2.0;
    tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
}
