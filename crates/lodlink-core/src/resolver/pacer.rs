//! Politeness gate between outbound requests.

use std::time::Duration;

/// A fixed-interval gate.
///
/// The resolution engine talks to shared, rate-limited public services one
/// request at a time; pausing at the gate keeps the aggregate rate low and
/// predictable. A zero interval disables the gate.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait out the configured interval.
    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_interval_returns_immediately() {
        let pacer = Pacer::from_millis(0);
        let start = std::time::Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_pause_sleeps_for_interval() {
        let pacer = Pacer::from_millis(30);
        let start = std::time::Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
