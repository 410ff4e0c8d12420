use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use manga_fetch::utils::display_summary;
use manga_fetch::{Config, Downloader, MangaCrawler, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();

    let config = Config::load().context("配置初始化失败")?;
    info!("运行模式: {:?}，输出文件: {}", config.mode, config.output.display());

    let downloader = Downloader::new(&config).context("HTTP 客户端初始化失败")?;
    let crawler = MangaCrawler::new(downloader, &config);

    let start = Instant::now();
    let state = crawler.run(&config.mode).await?;
    display_summary(start.elapsed(), &state);

    Ok(())
}
