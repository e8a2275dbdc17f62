mod dimension;
mod rect;

#[doc(inline)]
pub use dimension::Dimension;
#[doc(inline)]
pub use dimension::Orientation;
#[doc(inline)]
pub use rect::Rect;
