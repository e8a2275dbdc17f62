mod job;
mod part;
mod placement;
mod sheet;

#[doc(inline)]
pub use job::Job;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use sheet::Sheet;
