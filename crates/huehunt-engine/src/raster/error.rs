use std::fmt;

/// Errors raised by [`Raster`](super::Raster) access and export.
#[derive(Debug)]
pub enum RasterError {
    /// A read-back coordinate outside `[0, side)` on either axis.
    OutOfBounds { x: u32, y: u32, side: u32 },
    /// PNG encoding or file I/O failed.
    Encode(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::OutOfBounds { x, y, side } => {
                write!(f, "pixel ({x}, {y}) is outside the {side}x{side} raster")
            }
            RasterError::Encode(e) => write!(f, "raster export failed: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::OutOfBounds { .. } => None,
            RasterError::Encode(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Encode(e)
    }
}
