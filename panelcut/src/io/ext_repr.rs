use serde::{Deserialize, Serialize};

/// A cutting job as supplied from outside the library
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJob {
    /// The name of the job
    pub name: String,
    /// Size of the stock sheets
    pub stock: ExtSize,
    /// Parts to be cut, in request order
    pub parts: Vec<ExtPart>,
}

/// Width and height in the job's unit
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSize {
    pub width: f32,
    pub height: f32,
}

/// A requested part with a demand
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPart {
    #[serde(flatten)]
    pub size: ExtSize,
    /// Amount of times this part has to be cut
    #[serde(default = "default_demand")]
    pub demand: usize,
}

fn default_demand() -> usize {
    1
}

/// Packing solution with its statistics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub stock: ExtSize,
    pub sheet_count: usize,
    /// Sum of the area of the placed parts
    pub total_part_area: f32,
    /// Sum of the area of the consumed sheets
    pub total_sheet_area: f32,
    pub waste_percent: f32,
    pub sheets: Vec<ExtSheet>,
    /// Parts which do not fit on the stock in any orientation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub oversize: Vec<ExtOversize>,
}

/// A consumed sheet and what was cut from it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub id: usize,
    pub placements: Vec<ExtPlacement>,
    /// Placed area divided by the sheet area
    pub density: f32,
}

/// A part at its position on a sheet, origin at the lower-left corner
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Index of the part in the expanded request list
    pub part_id: usize,
    pub x: f32,
    pub y: f32,
    /// Effective width after rotation
    pub width: f32,
    /// Effective height after rotation
    pub height: f32,
    pub rotated: bool,
}

/// A part that could not be placed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtOversize {
    pub part_id: usize,
    pub width: f32,
    pub height: f32,
}
