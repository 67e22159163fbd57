// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// A fatal error. Terminates the whole run.
#[derive(Debug)]
pub enum Error {
    /// The size list is empty.
    NoSizes,

    /// An icon size is zero or larger than `Config::MAX_SIZE`.
    InvalidSize(u32),

    /// Failed to create the output directory.
    CreateDir(PathBuf, std::io::Error),

    /// Failed to encode the placeholder image.
    Encode(String),

    /// Failed to write the placeholder image.
    Write(PathBuf, std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NoSizes => {
                write!(f, "no icon sizes were requested")
            }
            Error::InvalidSize(size) => {
                write!(f, "icon size {} is invalid", size)
            }
            Error::CreateDir(ref path, ref e) => {
                write!(f, "failed to create '{}' cause {}", path.display(), e)
            }
            Error::Encode(ref e) => {
                write!(f, "failed to encode a placeholder cause {}", e)
            }
            Error::Write(ref path, ref e) => {
                write!(f, "failed to write '{}' cause {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::CreateDir(_, ref e) | Error::Write(_, ref e) => Some(e),
            _ => None,
        }
    }
}

/// A rasterization failure.
///
/// Never fatal: the generator replaces the icon with a placeholder.
#[derive(Debug)]
pub enum RasterError {
    /// Failed to read the SVG source.
    Read(std::io::Error),

    /// The source is not a valid SVG.
    Svg(usvg::Error),

    /// The target size is zero or too large.
    InvalidSize(u32),

    /// Failed to encode the rendered image.
    Encode(String),

    /// Failed to write the rendered image.
    Write(std::io::Error),
}

impl From<usvg::Error> for RasterError {
    fn from(e: usvg::Error) -> Self {
        RasterError::Svg(e)
    }
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            RasterError::Read(ref e) => {
                write!(f, "failed to read the source cause {}", e)
            }
            RasterError::Svg(ref e) => {
                write!(f, "{}", e)
            }
            RasterError::InvalidSize(size) => {
                write!(f, "target size {} is invalid", size)
            }
            RasterError::Encode(ref e) => {
                write!(f, "failed to encode PNG cause {}", e)
            }
            RasterError::Write(ref e) => {
                write!(f, "failed to write PNG cause {}", e)
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            RasterError::Read(ref e) | RasterError::Write(ref e) => Some(e),
            RasterError::Svg(ref e) => Some(e),
            _ => None,
        }
    }
}
