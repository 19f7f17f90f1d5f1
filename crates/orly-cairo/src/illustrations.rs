//! Stock illustrations stored as `<dir>/<code>.png`

use std::fs::File;
use std::path::{Path, PathBuf};

use cairo::{Format, ImageSurface};
use orly_core::{CoverError, CoverResult, Illustration, IllustrationSource};

/// Directory of PNG illustrations named by image code
#[derive(Clone, Debug)]
pub struct PngIllustrations {
    dir: PathBuf,
}

impl PngIllustrations {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File an image code resolves to, if the code is a plain file stem
    pub fn path_for(&self, code: &str) -> Option<PathBuf> {
        let plain = !code.is_empty()
            && code != "."
            && !code.contains("..")
            && !code.contains(['/', '\\', '\0']);
        plain.then(|| self.dir.join(format!("{}.png", code)))
    }
}

impl IllustrationSource for PngIllustrations {
    fn load_illustration(&self, code: &str) -> CoverResult<Illustration> {
        let missing = || CoverError::IllustrationMissing { code: code.to_string() };

        let path = self.path_for(code).ok_or_else(missing)?;
        let mut file = File::open(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => missing(),
            _ => CoverError::Io { source: e },
        })?;

        let surface = ImageSurface::create_from_png(&mut file).map_err(|e| {
            CoverError::InvalidIllustration {
                code: code.to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            "Loaded illustration {} ({}x{}) from {}",
            code,
            surface.width(),
            surface.height(),
            path.display()
        );
        illustration_from_surface(code, &surface)
    }
}

/// Copy the pixels of a decoded cairo surface
pub fn illustration_from_surface(code: &str, surface: &ImageSurface) -> CoverResult<Illustration> {
    let has_alpha = match surface.format() {
        Format::ARgb32 => true,
        Format::Rgb24 => false,
        other => {
            return Err(CoverError::InvalidIllustration {
                code: code.to_string(),
                message: format!("unsupported pixel format {:?}", other),
            })
        }
    };

    let mut data = Vec::new();
    surface
        .with_data(|bytes| data.extend_from_slice(bytes))
        .map_err(|e| CoverError::InvalidIllustration {
            code: code.to_string(),
            message: e.to_string(),
        })?;

    Ok(Illustration {
        code: code.to_string(),
        data,
        width: surface.width() as usize,
        height: surface.height() as usize,
        stride: surface.stride() as usize,
        has_alpha,
    })
}
