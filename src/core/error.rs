/// Error type shared by every canvas operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown cap: {0}")]
    UnknownCap(String),

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("unknown font family: {0}")]
    UnknownFontFamily(String),

    #[error("unknown font style: {0}")]
    UnknownFontStyle(String),

    #[error("canvas has no target bitmap")]
    Unbound,

    #[error("canvas surface has no pixel extents")]
    NoExtents,

    #[error("invalid bitmap: {0}")]
    InvalidBitmap(String),

    #[error("pixel ({x}, {y}) is outside the bitmap")]
    OutOfBounds { x: i32, y: i32 },

    #[error("matrix is not invertible")]
    SingularMatrix,

    #[error(transparent)]
    Cairo(#[from] cairo::Error),

    #[error(transparent)]
    Borrow(#[from] cairo::BorrowError),

    #[error(transparent)]
    Io(#[from] cairo::IoError),
}

pub type Result<T> = std::result::Result<T, Error>;
