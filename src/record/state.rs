/// 一次运行的计数状态，由爬虫显式传递并在每章之后更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlState {
    seed: u64,
    next_sequence_id: u64,
    chapters: usize,
}

impl CrawlState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            next_sequence_id: seed,
            chapters: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 下一条记录的编号，也是中断后续爬应使用的 seed
    pub fn next_sequence_id(&self) -> u64 {
        self.next_sequence_id
    }

    pub fn chapters(&self) -> usize {
        self.chapters
    }

    pub fn images(&self) -> u64 {
        self.next_sequence_id - self.seed
    }

    pub(crate) fn take_sequence_id(&mut self) -> u64 {
        let id = self.next_sequence_id;
        self.next_sequence_id += 1;
        id
    }

    pub(crate) fn finish_chapter(&mut self) {
        self.chapters += 1;
    }
}
