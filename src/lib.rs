// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`icongen` renders the PNG icon set of a web-app manifest from a single SVG source.

Each requested size is rasterized with [resvg]. When the source cannot be rendered
(missing, malformed, unsupported), a flat placeholder of the same size is written instead,
so a run always leaves one PNG per size behind.

```no_run
let generator = icongen::Generator::new(icongen::Config::default());
generator.run(|icon| println!("{}", icon.path.display()))?;
# Ok::<(), icongen::Error>(())
```

[resvg]: https://github.com/RazrFalcon/resvg
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use resvg;
pub use tiny_skia;
pub use usvg;

mod config;
mod error;
mod generator;
mod placeholder;
mod raster;

pub use config::Config;
pub use error::{Error, RasterError};
pub use generator::{Generator, Icon, Outcome};
pub use placeholder::placeholder;
pub use raster::Rasterizer;

/// Converts an SVG color into a `tiny-skia` one.
pub(crate) fn svg_to_skia_color(color: svgtypes::Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}
