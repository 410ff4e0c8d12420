/// 一个待抓取的章节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReference {
    pub url: String,
    /// 链接末尾的几个字符，不保证唯一
    pub id: String,
}

impl ChapterReference {
    /// 目录页模式：绝对地址由 host 拼接相对链接，编号取相对链接的末尾
    pub fn from_listing(host: &str, href: &str, id_len: usize) -> Self {
        Self {
            url: format!("{}{}", host, href),
            id: suffix(href, id_len).to_owned(),
        }
    }

    /// 续爬模式：编号取完整地址的末尾
    pub fn from_url(url: &str, id_len: usize) -> Self {
        Self {
            url: url.to_owned(),
            id: suffix(url, id_len).to_owned(),
        }
    }
}

/// 按字符取末尾 `len` 个字符，不足时返回整个字符串
pub fn suffix(s: &str, len: usize) -> &str {
    if len == 0 {
        return "";
    }
    match s.char_indices().rev().nth(len - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_counts_chars() {
        assert_eq!(suffix("chapter-94", 2), "94");
        assert_eq!(suffix("chapter-94", 1), "4");
        assert_eq!(suffix("7", 2), "7");
        assert_eq!(suffix("第十二话", 2), "二话");
        assert_eq!(suffix("abc", 0), "");
    }

    #[test]
    fn listing_reference_uses_relative_link() {
        let chapter = ChapterReference::from_listing(
            "https://mangadna.com",
            "/manga/secret-class/chapter-94",
            2,
        );
        assert_eq!(chapter.url, "https://mangadna.com/manga/secret-class/chapter-94");
        assert_eq!(chapter.id, "94");
    }

    #[test]
    fn resume_reference_uses_full_url() {
        let chapter =
            ChapterReference::from_url("https://mangadna.com/manga/secret-class/chapter-95", 1);
        assert_eq!(chapter.id, "5");
    }
}
