use crate::CutError;
use crate::geometry::Dimension;

/// Axis-aligned rectangle covering `[x_min, x_max) × [y_min, y_max)`
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self, CutError> {
        match x_min < x_max && y_min < y_max {
            true => Ok(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            false => Err(CutError::InvalidDimension {
                width: x_max - x_min,
                height: y_max - y_min,
            }),
        }
    }

    pub fn from_origin_and_size(x: f32, y: f32, dim: Dimension) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + dim.width(),
            y_max: y + dim.height(),
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Open-interval overlap test: rectangles that only share an edge or corner do not collide.
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }

    /// True if `other` lies entirely within `self`, touching edges included
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }
}

impl From<Dimension> for Rect {
    fn from(dim: Dimension) -> Self {
        Rect::from_origin_and_size(0.0, 0.0, dim)
    }
}
