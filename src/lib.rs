pub mod config;
pub mod crawler;
pub mod error;
pub mod logger;
pub mod record;
pub mod utils;

pub use crate::config::{Config, RunMode};
pub use crawler::{Downloader, Fetch, MangaCrawler};
pub use error::{CrawlError, ErrorKind};
pub use record::{ChapterReference, CrawlState, ImageRecord};
