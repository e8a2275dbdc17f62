use crate::geometry::Dimension;

/// A rectangular piece which has to be cut from stock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    /// Position of the part in the requested list, used for reporting and tie-breaking
    pub id: usize,
    pub dim: Dimension,
}

impl Part {
    pub fn new(id: usize, dim: Dimension) -> Self {
        Part { id, dim }
    }

    pub fn area(&self) -> f32 {
        self.dim.area()
    }
}
