pub mod downloader;
pub mod pacer;
pub mod parser;
pub mod processor;

use std::path::Path;
use std::time::Duration;

use scraper::Html;
use tokio::fs;
use tracing::{error, info, instrument};

pub use downloader::{Downloader, Fetch};
pub use pacer::Pacer;
pub use parser::Parser;
pub use processor::Processor;

use crate::config::{Config, RunMode, SiteConfig};
use crate::error::{CrawlError, Result};
use crate::record::{ChapterReference, CrawlState};

pub struct MangaCrawler<'c, F: Fetch = Downloader> {
    fetcher: F,
    site: &'c SiteConfig,
    parser: Parser<'c>,
    processor: Processor,
    delay: Duration,
}

impl<'c, F: Fetch> MangaCrawler<'c, F> {
    pub fn new(fetcher: F, config: &'c Config) -> Self {
        Self {
            fetcher,
            site: &config.site,
            parser: Parser::new(&config.site),
            processor: Processor::new(config.output.clone()),
            delay: config.delay(),
        }
    }

    /// 按运行模式依次抓取所有章节，遇到第一个错误即停止
    ///
    /// 返回最终的计数状态，其中的下一个编号可作为续爬的 seed。
    #[instrument(skip_all)]
    pub async fn run(&self, mode: &RunMode) -> Result<CrawlState> {
        let chapters = match mode {
            RunMode::Listing { .. } => self.listing_chapters().await?,
            RunMode::Resume { chapter_file, .. } => self.resume_chapters(chapter_file).await?,
        };
        info!("共 {} 章待抓取，起始编号 {}", chapters.len(), mode.seed());

        let mut pacer = Pacer::new(self.delay);
        let mut state = CrawlState::new(mode.seed());
        for chapter in &chapters {
            pacer.wait().await;
            state = self
                .crawl_chapter(chapter, state)
                .await
                .inspect_err(|e| error!("章节抓取失败 {}: {}", chapter.url, e))?;
            pacer.mark();
        }

        Ok(state)
    }

    #[instrument(skip_all)]
    pub async fn listing_chapters(&self) -> Result<Vec<ChapterReference>> {
        let listing_url = &self.site.listing_url;
        info!("正在获取章节目录: {}", listing_url);
        let listing_html = self
            .fetcher
            .fetch(listing_url)
            .await
            .inspect_err(|e| error!("目录页获取失败 {}: {}", listing_url, e))?;

        self.parser.chapter_list(&listing_html)
    }

    /// 每行一个章节地址，去掉首尾空白，空行忽略
    #[instrument(skip(self))]
    pub async fn resume_chapters(&self, chapter_file: &Path) -> Result<Vec<ChapterReference>> {
        info!("正在读取章节列表");
        let content = fs::read_to_string(chapter_file)
            .await
            .map_err(CrawlError::io(chapter_file))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|url| ChapterReference::from_url(url, self.site.resume_id_len))
            .collect())
    }

    #[instrument(skip(self, state), fields(chapter = %chapter.id))]
    pub async fn crawl_chapter(
        &self,
        chapter: &ChapterReference,
        state: CrawlState,
    ) -> Result<CrawlState> {
        info!("正在抓取章节: {}", chapter.url);
        let chapter_html = self.fetcher.fetch(&chapter.url).await?;
        let document = Html::parse_document(&chapter_html);
        let srcs = self.parser.image_srcs(&document)?;

        self.processor.append_chapter(chapter, srcs, state).await
    }
}
