use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// 两章之间保持最小间隔
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            let deadline = last + self.interval;
            if deadline > Instant::now() {
                debug!("等待 {:?} 后继续", deadline - Instant::now());
                sleep_until(deadline).await;
            }
        }
    }

    pub fn mark(&mut self) {
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_wait_is_immediate() {
        let mut pacer = Pacer::new(Duration::from_millis(1500));
        let start = Instant::now();
        pacer.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_interval_after_mark() {
        let mut pacer = Pacer::new(Duration::from_millis(1500));
        pacer.mark();
        let start = Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
