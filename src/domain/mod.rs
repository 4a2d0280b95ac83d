mod catalog;
mod narration;
mod scripts;

pub use catalog::Catalog;
pub use narration::NarrationTrack;
