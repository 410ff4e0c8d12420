use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use scraper::Selector;
use serde::{Deserialize, Deserializer};

static CONFIG_NAME: &str = "config";

static DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1; AcooBrowser; .NET CLR 1.1.4322; .NET CLR 2.0.50727)";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// 只作用于 http:// 地址，空字符串表示不使用代理
    #[serde(default = "default_proxy")]
    pub proxy: Option<String>,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub mode: RunMode,
}

impl Config {
    /// 读取当前目录下的 config.toml，文件不存在时全部使用默认值
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .add_source(
                config::File::with_name(CONFIG_NAME)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("配置文件反序列化失败: {}", e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("配置内容反序列化失败: {}", e))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// 运行模式，每次运行只能选一种
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RunMode {
    /// 先抓目录页，再依次抓取每一章
    Listing {
        #[serde(default = "default_listing_seed")]
        seed: u64,
    },
    /// 从文件读取章节地址，接着上次中断的编号继续
    Resume {
        #[serde(default = "default_chapter_file")]
        chapter_file: PathBuf,
        #[serde(default = "default_resume_seed")]
        seed: u64,
    },
}

impl RunMode {
    pub fn seed(&self) -> u64 {
        match self {
            RunMode::Listing { seed } | RunMode::Resume { seed, .. } => *seed,
        }
    }
}

impl Default for RunMode {
    fn default() -> Self {
        RunMode::Listing {
            seed: default_listing_seed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
    #[serde(
        default = "default_chapter_list",
        deserialize_with = "deserialize_selector"
    )]
    pub chapter_list: Selector,
    #[serde(
        default = "default_chapter_link",
        deserialize_with = "deserialize_selector"
    )]
    pub chapter_link: Selector,
    #[serde(default = "default_content", deserialize_with = "deserialize_selector")]
    pub content: Selector,
    #[serde(default = "default_image", deserialize_with = "deserialize_selector")]
    pub image: Selector,
    #[serde(default = "default_link_attr")]
    pub link_attr: String,
    #[serde(default = "default_image_attr")]
    pub image_attr: String,
    #[serde(default = "default_listing_id_len")]
    pub listing_id_len: usize,
    #[serde(default = "default_resume_id_len")]
    pub resume_id_len: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            listing_url: default_listing_url(),
            chapter_list: default_chapter_list(),
            chapter_link: default_chapter_link(),
            content: default_content(),
            image: default_image(),
            link_attr: default_link_attr(),
            image_attr: default_image_attr(),
            listing_id_len: default_listing_id_len(),
            resume_id_len: default_resume_id_len(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("imgData_1.txt")
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_owned()
}

fn default_proxy() -> Option<String> {
    Some("http://127.0.0.1:10809".to_owned())
}

fn default_listing_seed() -> u64 {
    1
}

fn default_resume_seed() -> u64 {
    1445
}

fn default_chapter_file() -> PathBuf {
    PathBuf::from("chapter_1.txt")
}

fn default_host() -> String {
    "https://mangadna.com".to_owned()
}

fn default_listing_url() -> String {
    "https://mangadna.com/manga/secret-class".to_owned()
}

fn default_chapter_list() -> Selector {
    builtin_selector("ul.row-content-chapter")
}

fn default_chapter_link() -> Selector {
    builtin_selector("a")
}

fn default_content() -> Selector {
    builtin_selector("div.read-content")
}

fn default_image() -> Selector {
    builtin_selector("img")
}

fn default_link_attr() -> String {
    "href".to_owned()
}

fn default_image_attr() -> String {
    "src".to_owned()
}

fn default_listing_id_len() -> usize {
    2
}

fn default_resume_id_len() -> usize {
    1
}

fn builtin_selector(s: &str) -> Selector {
    Selector::parse(s).expect("内置选择器无效")
}

fn deserialize_selector<'de, D>(deserializer: D) -> Result<Selector, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    Selector::parse(&s)
        .map_err(|e| serde::de::Error::custom(format!("Invalid selector '{}': {}", s, e)))
}
