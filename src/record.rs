pub mod chapter;
pub mod image;
pub mod state;

pub use chapter::ChapterReference;
pub use image::ImageRecord;
pub use state::CrawlState;
