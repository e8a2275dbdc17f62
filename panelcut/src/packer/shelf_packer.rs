use crate::entities::{Job, Part, Sheet};
use crate::geometry::Dimension;
use crate::packer::{ShelfInsertion, ShelfLayout};
use crate::report::{Report, summarize};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::time::Instant;
use thiserror::Error;
use thousands::Separable;

/// A part which cannot be cut from an empty sheet, neither as given nor rotated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("part {} ({}) does not fit on a {} sheet in any orientation", .part.id, .part.dim, .stock)]
pub struct OversizePart {
    pub part: Part,
    pub stock: Dimension,
}

/// Outcome of a packing run: the consumed sheets and the parts that could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    pub stock: Dimension,
    /// Sheets in the order they were opened
    pub sheets: Vec<Sheet>,
    /// Oversize parts, in placement order
    pub oversize: Vec<OversizePart>,
}

impl Packing {
    pub fn empty(stock: Dimension) -> Self {
        Packing {
            stock,
            sheets: vec![],
            oversize: vec![],
        }
    }

    pub fn report(&self) -> Report<'_> {
        summarize(&self.sheets, self.stock)
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// True if every requested part was placed
    pub fn is_complete(&self) -> bool {
        self.oversize.is_empty()
    }
}

/// Greedy shelf packer for a single stock size.
///
/// Parts are handled in descending area order. Each part goes onto the first open sheet
/// (most recently opened first) that can take it on its current shelf or on a new shelf;
/// a fresh sheet is opened only when none can.
/// Single pass, no backtracking and no randomness: the same input always yields the same sheets.
#[derive(Debug, Clone, Copy)]
pub struct ShelfPacker {
    pub stock: Dimension,
}

impl ShelfPacker {
    pub fn new(stock: Dimension) -> Self {
        ShelfPacker { stock }
    }

    pub fn pack(&self, parts: &[Part]) -> Packing {
        let start = Instant::now();
        let mut layouts: Vec<ShelfLayout> = vec![];
        let mut oversize = vec![];

        for part in placement_order(parts) {
            if !part.dim.fits_within_any_orientation(&self.stock) {
                let err = OversizePart {
                    part: *part,
                    stock: self.stock,
                };
                warn!("[PACK] {err}");
                oversize.push(err);
                continue;
            }

            let (l_index, insertion) = match search_layouts(&layouts, part) {
                Some(found) => found,
                None => {
                    let layout = ShelfLayout::new(layouts.len(), self.stock);
                    match layout.find_insertion(part) {
                        Some(insertion) => {
                            debug!("[PACK] opening sheet {}", layouts.len());
                            layouts.push(layout);
                            (layouts.len() - 1, insertion)
                        }
                        None => {
                            //unreachable for parts that passed the oversize check
                            let err = OversizePart {
                                part: *part,
                                stock: self.stock,
                            };
                            warn!("[PACK] {err}");
                            oversize.push(err);
                            continue;
                        }
                    }
                }
            };

            let new_shelf = matches!(insertion, ShelfInsertion::NewShelf(_));
            let placement = layouts[l_index].insert(insertion);
            debug!(
                "[PACK] placed part {} ({}) on sheet {} at ({}, {}){}{}",
                part.id,
                placement.dim(),
                l_index,
                placement.x(),
                placement.y(),
                match placement.orientation().is_rotated() {
                    true => ", rotated",
                    false => "",
                },
                match new_shelf {
                    true => ", new shelf",
                    false => "",
                },
            );
        }

        let packing = Packing {
            stock: self.stock,
            sheets: layouts.into_iter().map(ShelfLayout::into_sheet).collect(),
            oversize,
        };

        debug_assert!(assertions::packing_is_valid(parts, &packing));

        {
            let report = packing.report();
            info!(
                "[PACK] placed {}/{} parts on {} sheet(s) in {:.3}ms, part area: {}, waste: {:.2}%",
                packing.placed_count(),
                parts.len(),
                report.sheet_count,
                start.elapsed().as_secs_f64() * 1000.0,
                report.total_part_area.separate_with_commas(),
                report.waste_percent
            );
        }
        if !packing.oversize.is_empty() {
            info!(
                "[PACK] {} part(s) do not fit on a {} sheet",
                packing.oversize.len(),
                self.stock
            );
        }

        packing
    }
}

/// Packs `parts` onto sheets of size `stock`.
pub fn pack(stock: Dimension, parts: &[Part]) -> Packing {
    ShelfPacker::new(stock).pack(parts)
}

/// Packs all parts of a [`Job`].
pub fn pack_job(job: &Job) -> Packing {
    pack(job.stock, &job.parts)
}

/// The order in which parts are placed: largest area first, ties kept in input order.
pub fn placement_order(parts: &[Part]) -> Vec<&Part> {
    parts
        .iter()
        .sorted_by_key(|p| Reverse(OrderedFloat(p.area())))
        .collect_vec()
}

/// Searches the open layouts, most recently opened first, for one that can take `part`.
fn search_layouts(layouts: &[ShelfLayout], part: &Part) -> Option<(usize, ShelfInsertion)> {
    layouts
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, layout)| layout.find_insertion(part).map(|ins| (i, ins)))
}
