use crate::entities::{Placement, Sheet};
use crate::geometry::Dimension;

/// Read-only view over the sheets of a packing run, with aggregate statistics.
/// The placements are exposed exactly as the packer produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<'a> {
    pub stock: Dimension,
    pub sheets: &'a [Sheet],
    pub sheet_count: usize,
    /// Sum of the areas of all placed parts
    pub total_part_area: f32,
    /// `sheet_count` times the stock area
    pub total_sheet_area: f32,
    /// Consumed area not covered by parts, as a percentage in `[0, 100]`
    pub waste_percent: f32,
}

impl<'a> Report<'a> {
    /// Percentage of the consumed area covered by parts, 0 when no sheets were consumed
    pub fn utilization_percent(&self) -> f32 {
        match self.sheet_count {
            0 => 0.0,
            _ => 100.0 - self.waste_percent,
        }
    }

    pub fn placement_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// All placements as `(sheet id, placement)`, sheet by sheet
    pub fn placements(&self) -> impl Iterator<Item = (usize, &'a Placement)> + 'a {
        self.sheets
            .iter()
            .flat_map(|s| s.placements.iter().map(move |p| (s.id, p)))
    }
}

/// Summarizes the sheets of a packing run.
/// Pure function of its inputs: zero sheets yield a report with zero area and zero waste.
pub fn summarize(sheets: &[Sheet], stock: Dimension) -> Report<'_> {
    let sheet_count = sheets.len();
    let total_part_area = sheets.iter().map(Sheet::placed_area).sum::<f32>();
    let total_sheet_area = sheet_count as f32 * stock.area();

    let waste_percent = match total_sheet_area > 0.0 {
        true => (100.0 * (1.0 - total_part_area / total_sheet_area)).clamp(0.0, 100.0),
        false => 0.0,
    };

    Report {
        stock,
        sheets,
        sheet_count,
        total_part_area,
        total_sheet_area,
        waste_percent,
    }
}
