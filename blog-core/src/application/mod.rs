use std::time::Duration;

pub mod article_service;
pub mod friend_service;

/// Artificial latency shared by the services; a zero delay skips the timer.
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
