mod shelf;
mod shelf_packer;

#[doc(inline)]
pub use shelf::Shelf;
#[doc(inline)]
pub use shelf::ShelfInsertion;
#[doc(inline)]
pub use shelf::ShelfLayout;
#[doc(inline)]
pub use shelf_packer::OversizePart;
#[doc(inline)]
pub use shelf_packer::Packing;
#[doc(inline)]
pub use shelf_packer::ShelfPacker;
#[doc(inline)]
pub use shelf_packer::pack;
#[doc(inline)]
pub use shelf_packer::pack_job;
#[doc(inline)]
pub use shelf_packer::placement_order;
