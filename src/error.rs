use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrawlError>;

/// 错误的大类，对应网络、页面结构和文件三种失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Extraction,
    Io,
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("请求失败 {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("响应状态异常 {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("响应内容不是有效的UTF-8 {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("无法找到元素: {0}")]
    MissingElement(String),

    #[error("元素 {element} 缺少属性 {attr}")]
    MissingAttr { element: String, attr: String },

    #[error("文件读写失败 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrawlError::Request { .. } | CrawlError::Status { .. } | CrawlError::Decode { .. } => {
                ErrorKind::Network
            }
            CrawlError::MissingElement(_) | CrawlError::MissingAttr { .. } => ErrorKind::Extraction,
            CrawlError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CrawlError::Io { path, source }
    }
}
