use scraper::Html;
use tracing::{info, instrument};

use crate::config::SiteConfig;
use crate::error::{CrawlError, Result};
use crate::record::ChapterReference;

#[derive(Clone, Copy)]
pub struct Parser<'c> {
    config: &'c SiteConfig,
}

impl<'c> Parser<'c> {
    pub fn new(config: &'c SiteConfig) -> Self {
        Self { config }
    }

    /// 按目录容器顺序、容器内链接顺序提取章节
    #[instrument(skip_all)]
    pub fn chapter_list(&self, listing_html: &str) -> Result<Vec<ChapterReference>> {
        info!("正在解析章节目录");
        let document = Html::parse_document(listing_html);
        let mut chapters = Vec::new();

        for list_elem in document.select(&self.config.chapter_list) {
            for link_elem in list_elem.select(&self.config.chapter_link) {
                let Some(href) = link_elem.value().attr(&self.config.link_attr) else {
                    return Err(CrawlError::MissingAttr {
                        element: link_elem.value().name().to_owned(),
                        attr: self.config.link_attr.clone(),
                    });
                };
                chapters.push(ChapterReference::from_listing(
                    &self.config.host,
                    href,
                    self.config.listing_id_len,
                ));
            }
        }

        info!("章节目录解析完成，共 {} 章", chapters.len());
        Ok(chapters)
    }

    /// 在第一个内容容器里按文档顺序取图片地址
    ///
    /// 容器不存在时立即失败；返回的迭代器只能消费一次，
    /// 遇到缺少地址属性的图片时产出错误。
    pub fn image_srcs<'d>(
        &self,
        document: &'d Html,
    ) -> Result<impl Iterator<Item = Result<&'d str>> + use<'d, 'c>> {
        let content_elem = document
            .select(&self.config.content)
            .next()
            .ok_or_else(|| CrawlError::MissingElement("章节内容容器".to_owned()))?;

        let config = self.config;
        Ok(content_elem.select(&config.image).map(move |img_elem| {
            img_elem
                .value()
                .attr(&config.image_attr)
                .ok_or_else(|| CrawlError::MissingAttr {
                    element: img_elem.value().name().to_owned(),
                    attr: config.image_attr.clone(),
                })
        }))
    }
}
