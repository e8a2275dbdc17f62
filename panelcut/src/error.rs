use crate::packer::OversizePart;
use thiserror::Error;

/// Everything that can go wrong when building or packing a cutting job.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutError {
    /// A width or height is zero, negative or not a finite number.
    /// Rejects the entire request before any packing starts.
    #[error("invalid dimension {width}x{height}: both sides must be positive and finite")]
    InvalidDimension { width: f32, height: f32 },

    /// A placement that would violate the sheet bounds.
    #[error(
        "invalid placement of part {part_id} at ({x}, {y}) with size {width}x{height} on a {stock_width}x{stock_height} sheet"
    )]
    InvalidPlacement {
        part_id: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stock_width: f32,
        stock_height: f32,
    },

    /// Size text that does not look like `WxH`.
    #[error("malformed size {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },

    /// A part that does not fit on an empty sheet in any orientation.
    #[error(transparent)]
    Oversize(#[from] OversizePart),
}
