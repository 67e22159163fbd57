// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use crate::Error;

/// Generation options.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    /// Square icon sizes in pixels, processed in order.
    ///
    /// Default: `[192, 512]`
    pub sizes: Vec<u32>,

    /// The SVG source. Plain or gzip-compressed.
    ///
    /// Default: `icon.svg`
    pub source_path: PathBuf,

    /// Directory that receives the icons. Created when missing.
    ///
    /// Default: `icons`
    pub output_dir: PathBuf,

    /// Fill color of the placeholder written when rendering fails.
    ///
    /// Default: `#16213e`
    pub placeholder_color: svgtypes::Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sizes: Self::DEFAULT_SIZES.to_vec(),
            source_path: PathBuf::from("icon.svg"),
            output_dir: PathBuf::from("icons"),
            placeholder_color: svgtypes::Color::new_rgb(0x16, 0x21, 0x3e),
        }
    }
}

impl Config {
    /// Sizes required by an installable web-app manifest.
    pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

    /// The complete manifest icon set, including the legacy launcher sizes.
    pub const MANIFEST_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

    /// The largest accepted icon side, in pixels.
    pub const MAX_SIZE: u32 = 16384;

    /// Replaces the size list.
    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Replaces the source path.
    pub fn with_source<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source_path = path.into();
        self
    }

    /// Replaces the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the placeholder color.
    pub fn with_placeholder_color(mut self, color: svgtypes::Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Returns an icon file name, like `icon-192x192.png`.
    pub fn file_name(size: u32) -> String {
        format!("icon-{}x{}.png", size, size)
    }

    /// Returns the destination of an icon with the specified size.
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(Self::file_name(size))
    }

    /// Checks that `size` is in `1..=MAX_SIZE`.
    pub fn is_valid_size(size: u32) -> bool {
        (1..=Self::MAX_SIZE).contains(&size)
    }

    /// Checks that there is at least one size and every size is valid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sizes.is_empty() {
            return Err(Error::NoSizes);
        }

        match self.sizes.iter().find(|s| !Self::is_valid_size(**s)) {
            Some(size) => Err(Error::InvalidSize(*size)),
            None => Ok(()),
        }
    }
}
