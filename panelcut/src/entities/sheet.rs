use crate::entities::Placement;
use crate::geometry::Dimension;

/// One consumed piece of stock together with the parts cut from it.
/// Sheets are never merged or split once a packing run has produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// Index of the sheet in opening order
    pub id: usize,
    pub stock: Dimension,
    /// Placements in the order they were made
    pub placements: Vec<Placement>,
}

impl Sheet {
    pub fn new(id: usize, stock: Dimension) -> Self {
        Sheet {
            id,
            stock,
            placements: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Sum of the areas of all placed parts
    pub fn placed_area(&self) -> f32 {
        self.placements.iter().map(|p| p.area()).sum()
    }

    /// Ratio of the placed area to the area of the sheet
    pub fn density(&self) -> f32 {
        self.placed_area() / self.stock.area()
    }
}
