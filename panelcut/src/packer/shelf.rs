use crate::entities::{Part, Placement, Sheet};
use crate::geometry::{Dimension, Orientation};
use ordered_float::OrderedFloat;

/// A horizontal row on a sheet in which parts are placed left to right.
/// Its height is fixed by the part that opened it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shelf {
    pub y: f32,
    pub height: f32,
    /// Next free x-offset
    pub x_cursor: f32,
}

impl Shelf {
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Where on a [`ShelfLayout`] a part can go.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShelfInsertion {
    /// Next to the parts already on the current shelf
    CurrentShelf(Placement),
    /// At the start of a new shelf stacked on top of the current one
    NewShelf(Placement),
}

impl ShelfInsertion {
    pub fn placement(&self) -> &Placement {
        match self {
            ShelfInsertion::CurrentShelf(p) | ShelfInsertion::NewShelf(p) => p,
        }
    }
}

/// Dynamic counterpart of a [`Sheet`] while a packing run is in progress.
/// Only the last shelf (the current one) accepts new parts.
#[derive(Clone, Debug)]
pub struct ShelfLayout {
    sheet: Sheet,
    shelves: Vec<Shelf>,
}

impl ShelfLayout {
    pub fn new(id: usize, stock: Dimension) -> Self {
        ShelfLayout {
            sheet: Sheet::new(id, stock),
            shelves: vec![],
        }
    }

    pub fn stock(&self) -> Dimension {
        self.sheet.stock
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn current_shelf(&self) -> Option<&Shelf> {
        self.shelves.last()
    }

    /// Height already claimed by shelves, where the next shelf would start
    pub fn used_height(&self) -> f32 {
        self.current_shelf().map_or(0.0, Shelf::top)
    }

    /// Finds a spot for `part`: first on the current shelf (as given, then rotated),
    /// otherwise on a new shelf, picking the orientation with the lowest shelf height.
    pub fn find_insertion(&self, part: &Part) -> Option<ShelfInsertion> {
        self.current_shelf_placement(part)
            .map(ShelfInsertion::CurrentShelf)
            .or_else(|| self.new_shelf_placement(part).map(ShelfInsertion::NewShelf))
    }

    /// Commits an insertion obtained from [`ShelfLayout::find_insertion`] on this layout.
    ///
    /// Panics if a [`ShelfInsertion::CurrentShelf`] is committed to a layout without shelves.
    pub fn insert(&mut self, insertion: ShelfInsertion) -> &Placement {
        match insertion {
            ShelfInsertion::CurrentShelf(p) => {
                let shelf = self
                    .shelves
                    .last_mut()
                    .expect("current shelf insertion requires an open shelf");
                debug_assert!(p.height() <= shelf.height && p.y() == shelf.y);
                shelf.x_cursor = p.x() + p.width();
            }
            ShelfInsertion::NewShelf(p) => {
                debug_assert!(p.y() == self.used_height());
                self.shelves.push(Shelf {
                    y: p.y(),
                    height: p.height(),
                    x_cursor: p.width(),
                });
            }
        }
        let placement = *insertion.placement();
        self.sheet.placements.push(placement);
        &self.sheet.placements[self.sheet.placements.len() - 1]
    }

    pub fn into_sheet(self) -> Sheet {
        self.sheet
    }

    fn current_shelf_placement(&self, part: &Part) -> Option<Placement> {
        let shelf = self.current_shelf()?;
        Orientation::ALL.into_iter().find_map(|o| {
            let dim = part.dim.oriented(o);
            match dim.height() <= shelf.height {
                true => Placement::try_new(part, o, shelf.x_cursor, shelf.y, self.stock()).ok(),
                false => None,
            }
        })
    }

    fn new_shelf_placement(&self, part: &Part) -> Option<Placement> {
        let shelf_y = self.used_height();
        Orientation::ALL
            .into_iter()
            .filter_map(|o| Placement::try_new(part, o, 0.0, shelf_y, self.stock()).ok())
            .min_by_key(|p| OrderedFloat(p.height()))
    }
}
