use std::path::PathBuf;

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::error::{CrawlError, Result};
use crate::record::{ChapterReference, CrawlState, ImageRecord};

/// 以追加方式写入输出文件，每章打开一次、写完即关闭
#[derive(Clone)]
pub struct Processor {
    output: PathBuf,
}

impl Processor {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }

    #[instrument(skip_all, fields(chapter = %chapter.id))]
    pub async fn append_chapter<'a, I>(
        &self,
        chapter: &ChapterReference,
        srcs: I,
        mut state: CrawlState,
    ) -> Result<CrawlState>
    where
        I: IntoIterator<Item = Result<&'a str>>,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output)
            .await
            .map_err(CrawlError::io(&self.output))?;

        let written = self
            .write_records(&mut file, &chapter.id, srcs, &mut state)
            .await;
        // 出错时已写入的行也要落盘
        file.flush().await.map_err(CrawlError::io(&self.output))?;
        let count = written?;

        state.finish_chapter();
        info!("章节 {} 已写入 {} 条记录", chapter.id, count);
        Ok(state)
    }

    async fn write_records<'a, I>(
        &self,
        file: &mut File,
        chapter_id: &str,
        srcs: I,
        state: &mut CrawlState,
    ) -> Result<u64>
    where
        I: IntoIterator<Item = Result<&'a str>>,
    {
        let mut count = 0;
        for src in srcs {
            let record = ImageRecord {
                url: src?,
                chapter_id,
                index: count + 1,
                sequence_id: state.take_sequence_id(),
            };
            file.write_all(record.to_line().as_bytes())
                .await
                .map_err(CrawlError::io(&self.output))?;
            info!("{}", record);
            count += 1;
        }
        Ok(count)
    }
}
