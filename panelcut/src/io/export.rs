use crate::entities::{Placement, Sheet};
use crate::geometry::Dimension;
use crate::io::ext_repr::{ExtOversize, ExtPlacement, ExtSheet, ExtSize, ExtSolution};
use crate::packer::{OversizePart, Packing};
use itertools::Itertools;

/// Exports a packing and its statistics out of the library
pub fn export_solution(packing: &Packing) -> ExtSolution {
    let report = packing.report();
    ExtSolution {
        stock: export_size(packing.stock),
        sheet_count: report.sheet_count,
        total_part_area: report.total_part_area,
        total_sheet_area: report.total_sheet_area,
        waste_percent: report.waste_percent,
        sheets: packing.sheets.iter().map(export_sheet).collect_vec(),
        oversize: packing.oversize.iter().map(export_oversize).collect_vec(),
    }
}

pub fn export_sheet(sheet: &Sheet) -> ExtSheet {
    ExtSheet {
        id: sheet.id,
        placements: sheet.placements.iter().map(export_placement).collect_vec(),
        density: sheet.density(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        part_id: placement.part_id(),
        x: placement.x(),
        y: placement.y(),
        width: placement.width(),
        height: placement.height(),
        rotated: placement.orientation().is_rotated(),
    }
}

pub fn export_oversize(oversize: &OversizePart) -> ExtOversize {
    ExtOversize {
        part_id: oversize.part.id,
        width: oversize.part.dim.width(),
        height: oversize.part.dim.height(),
    }
}

pub fn export_size(dim: Dimension) -> ExtSize {
    ExtSize {
        width: dim.width(),
        height: dim.height(),
    }
}
