pub mod formula;
pub mod image;
pub mod table;

pub use formula::FormulaFence;
pub use image::ImageLine;
pub use table::PipeTable;
