use crate::CutError;
use crate::entities::Part;
use crate::geometry::{Dimension, Orientation, Rect};

/// A [`Part`] bound to a position on a [`Sheet`](crate::entities::Sheet).
/// The origin is the lower-left corner in sheet-local coordinates.
///
/// Can only be created through [`Placement::try_new`], which guarantees that the
/// occupied rectangle lies within the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    part_id: usize,
    orientation: Orientation,
    x: f32,
    y: f32,
    /// Effective size after applying the orientation
    dim: Dimension,
}

impl Placement {
    pub fn try_new(
        part: &Part,
        orientation: Orientation,
        x: f32,
        y: f32,
        stock: Dimension,
    ) -> Result<Self, CutError> {
        let dim = part.dim.oriented(orientation);
        let within_bounds = x.is_finite()
            && y.is_finite()
            && x >= 0.0
            && y >= 0.0
            && x + dim.width() <= stock.width()
            && y + dim.height() <= stock.height();

        match within_bounds {
            true => Ok(Placement {
                part_id: part.id,
                orientation,
                x,
                y,
                dim,
            }),
            false => Err(CutError::InvalidPlacement {
                part_id: part.id,
                x,
                y,
                width: dim.width(),
                height: dim.height(),
                stock_width: stock.width(),
                stock_height: stock.height(),
            }),
        }
    }

    pub fn part_id(&self) -> usize {
        self.part_id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.dim.width()
    }

    pub fn height(&self) -> f32 {
        self.dim.height()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn area(&self) -> f32 {
        self.dim.area()
    }

    /// The rectangle `[x, x + width) × [y, y + height)` occupied on the sheet
    pub fn rect(&self) -> Rect {
        Rect::from_origin_and_size(self.x, self.y, self.dim)
    }
}
