use reqwest::{Client, Proxy, header};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{CrawlError, Result};

/// 按地址获取页面文本
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetch> Fetch for &F {
    async fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url).await
    }
}

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, config.user_agent.parse()?);

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout());

        // 未配置代理时也不读取 HTTP_PROXY 等环境变量
        if let Some(proxy) = config.proxy() {
            builder = builder.proxy(Proxy::http(proxy)?);
        } else {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetch for Downloader {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("正在请求页面");
        let request_error = |source| CrawlError::Request {
            url: url.to_owned(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        debug!("页面下载完成: {} 字节", body.len());

        String::from_utf8(body.to_vec()).map_err(|source| CrawlError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}
