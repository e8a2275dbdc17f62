use crate::CutError;
use crate::entities::Part;
use crate::geometry::Dimension;
use itertools::Itertools;

/// A validated cutting request: one stock size and the parts to cut from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub stock: Dimension,
    /// Parts in the order they were requested, `parts[i].id == i`
    pub parts: Vec<Part>,
}

impl Job {
    pub fn new(stock: Dimension, dims: impl IntoIterator<Item = Dimension>) -> Self {
        let parts = dims
            .into_iter()
            .enumerate()
            .map(|(id, dim)| Part::new(id, dim))
            .collect_vec();
        Job { stock, parts }
    }

    /// Validates raw `(width, height)` pairs.
    /// The first non-positive size rejects the whole job.
    pub fn try_from_sizes(stock: (f32, f32), sizes: &[(f32, f32)]) -> Result<Self, CutError> {
        let stock = Dimension::try_from(stock)?;
        let dims: Vec<Dimension> = sizes
            .iter()
            .map(|&size| Dimension::try_from(size))
            .try_collect()?;
        Ok(Job::new(stock, dims))
    }

    pub fn total_part_area(&self) -> f32 {
        self.parts.iter().map(|p| p.area()).sum()
    }
}
