// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::{placeholder, Config, Error, RasterError, Rasterizer};

/// How an icon was produced.
#[derive(Debug)]
pub enum Outcome {
    /// The source was rendered.
    Rendered,
    /// The source could not be rendered and a placeholder was written instead.
    Placeholder(RasterError),
}

/// A written icon.
#[derive(Debug)]
pub struct Icon {
    /// Width and height in pixels.
    pub size: u32,
    /// Destination file.
    pub path: PathBuf,
    /// How the file content was produced.
    pub outcome: Outcome,
}

impl Icon {
    /// Checks that the icon is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.outcome, Outcome::Placeholder(_))
    }
}

/// Writes the icon set described by a [`Config`].
#[derive(Debug)]
pub struct Generator {
    config: Config,
    rasterizer: Rasterizer,
}

impl Generator {
    /// Creates a new generator.
    pub fn new(config: Config) -> Self {
        Generator {
            config,
            rasterizer: Rasterizer::new(),
        }
    }

    /// Returns the generator configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates the output directory.
    ///
    /// Does nothing when it already exists. Existing files are kept.
    pub fn prepare(&self) -> Result<(), Error> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| Error::CreateDir(dir.clone(), e))
    }

    /// Writes a single icon.
    ///
    /// Rendering failures are not errors: a placeholder is written instead
    /// and the failure is reported via [`Outcome::Placeholder`].
    /// Only a failure to write the placeholder itself is returned.
    ///
    /// The output directory must exist. See [`Generator::prepare`].
    pub fn generate(&self, size: u32) -> Result<Icon, Error> {
        self.generate_with(size, write_file)
    }

    fn generate_with<W>(&self, size: u32, mut write: W) -> Result<Icon, Error>
    where
        W: FnMut(&Path, &[u8]) -> std::io::Result<()>,
    {
        if !Config::is_valid_size(size) {
            return Err(Error::InvalidSize(size));
        }

        let path = self.config.output_path(size);

        let rendered = self
            .rasterizer
            .render_png(&self.config.source_path, size)
            .and_then(|data| write(&path, &data).map_err(RasterError::Write));

        let outcome = match rendered {
            Ok(()) => Outcome::Rendered,
            Err(e) => {
                log::info!("Failed to render '{}' cause {}.", path.display(), e);

                let data = placeholder(size, self.config.placeholder_color)?
                    .encode_png()
                    .map_err(|e| Error::Encode(e.to_string()))?;
                write(&path, &data).map_err(|e| Error::Write(path.clone(), e))?;

                Outcome::Placeholder(e)
            }
        };

        Ok(Icon {
            size,
            path,
            outcome,
        })
    }

    /// Writes all icons in order.
    ///
    /// `on_icon` is called as soon as each icon is written.
    pub fn run<F>(&self, mut on_icon: F) -> Result<Vec<Icon>, Error>
    where
        F: FnMut(&Icon),
    {
        self.config.validate()?;
        self.prepare()?;

        let mut icons = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let icon = self.generate(size)?;
            on_icon(&icon);
            icons.push(icon);
        }

        Ok(icons)
    }
}

/// Writes `data` via a sibling temporary file, so `path` is either replaced completely or untouched.
fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp_path = match path.file_name() {
        Some(name) => path.with_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        }
    };

    let res = std::fs::write(&tmp_path, data).and_then(|_| std::fs::rename(&tmp_path, path));
    if res.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }

    res
}
