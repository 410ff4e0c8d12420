use std::time::Duration;

use tracing::{info, instrument};

use crate::record::CrawlState;

#[instrument(skip_all)]
pub fn display_summary(duration: Duration, state: &CrawlState) {
    info!(
        "✅ 抓取完成！共 {} 章 {} 张图片，完成时间 {}",
        state.chapters(),
        state.images(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("下次续爬的起始编号: {}", state.next_sequence_id());
    info!("耗时: {}", format_elapsed(duration));
}

pub fn format_elapsed(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms >= 60000 {
        // 超过1分钟：显示分秒
        let mins = total_ms / 60000;
        let secs = (total_ms % 60000) / 1000;
        let ms_remaining = total_ms % 1000;

        if ms_remaining > 0 {
            format!("{}分{}秒{}毫秒", mins, secs, ms_remaining)
        } else {
            format!("{}分{}秒", mins, secs)
        }
    } else if total_ms >= 1000 {
        let secs = total_ms / 1000;
        let ms_remaining = total_ms % 1000;

        if ms_remaining > 0 {
            format!("{}秒{}毫秒", secs, ms_remaining)
        } else {
            format!("{}秒", secs)
        }
    } else {
        format!("{}毫秒", total_ms)
    }
}
