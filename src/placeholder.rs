// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Config, Error};

/// Creates a `size`x`size` pixmap filled with `color`.
///
/// `size` must be in `1..=Config::MAX_SIZE`.
pub fn placeholder(size: u32, color: svgtypes::Color) -> Result<tiny_skia::Pixmap, Error> {
    if !Config::is_valid_size(size) {
        return Err(Error::InvalidSize(size));
    }

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
    pixmap.fill(crate::svg_to_skia_color(color));
    Ok(pixmap)
}
