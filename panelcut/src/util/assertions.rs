use crate::entities::{Part, Sheet};
use crate::geometry::Rect;
use crate::packer::Packing;
use itertools::Itertools;

/// Every placement lies within the stock rectangle of its sheet
pub fn placements_within_sheet(sheet: &Sheet) -> bool {
    let bounds = Rect::from(sheet.stock);
    sheet
        .placements
        .iter()
        .all(|p| bounds.contains_rect(&p.rect()))
}

/// No two placements on the sheet overlap
pub fn placements_disjoint(sheet: &Sheet) -> bool {
    sheet
        .placements
        .iter()
        .tuple_combinations()
        .all(|(p1, p2)| !p1.rect().collides_with(&p2.rect()))
}

/// Each requested part is either placed exactly once or reported as oversize, never both
pub fn parts_conserved(parts: &[Part], packing: &Packing) -> bool {
    let placed_ids = packing
        .sheets
        .iter()
        .flat_map(|s| s.placements.iter().map(|p| p.part_id()));
    let oversize_ids = packing.oversize.iter().map(|o| o.part.id);

    let accounted = placed_ids.chain(oversize_ids).sorted().collect_vec();
    let requested = parts.iter().map(|p| p.id).sorted().collect_vec();

    accounted == requested
}

/// Placed parts keep their requested size, possibly rotated
pub fn placements_match_parts(parts: &[Part], packing: &Packing) -> bool {
    packing.sheets.iter().flat_map(|s| &s.placements).all(|pl| {
        parts
            .iter()
            .find(|p| p.id == pl.part_id())
            .is_some_and(|p| p.dim.oriented(pl.orientation()) == pl.dim())
    })
}

pub fn packing_is_valid(parts: &[Part], packing: &Packing) -> bool {
    packing.sheets.iter().all(|s| s.stock == packing.stock)
        && packing.sheets.iter().all(|s| !s.is_empty())
        && packing.sheets.iter().enumerate().all(|(i, s)| s.id == i)
        && packing.sheets.iter().all(placements_within_sheet)
        && packing.sheets.iter().all(placements_disjoint)
        && parts_conserved(parts, packing)
        && placements_match_parts(parts, packing)
}
