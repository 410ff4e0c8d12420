use std::fmt;

/// 输出文件中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord<'a> {
    pub sequence_id: u64,
    pub chapter_id: &'a str,
    pub index: u64,
    pub url: &'a str,
}

impl fmt::Display for ImageRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.sequence_id, self.chapter_id, self.index, self.url
        )
    }
}

impl ImageRecord<'_> {
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}
