/// Sliding-window rate limiter for outbound provider requests
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct Window {
    /// Timestamps of requests inside the current window
    request_times: VecDeque<Instant>,
    max_requests: usize,
    window: Duration,
}

impl Window {
    fn check_and_record(&mut self, now: Instant) -> Duration {
        // Remove old timestamps outside the window
        while let Some(&front) = self.request_times.front() {
            if now.duration_since(front) >= self.window {
                self.request_times.pop_front();
            } else {
                break;
            }
        }

        // If we're at the limit, calculate how long to wait
        if self.request_times.len() >= self.max_requests {
            if let Some(&oldest) = self.request_times.front() {
                return self.window - now.duration_since(oldest);
            }
        }

        self.request_times.push_back(now);
        Duration::ZERO
    }
}

/// Owned limiter: each provider client carries its own window.
pub struct RateLimiter {
    inner: Mutex<Window>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            inner: Mutex::new(Window {
                request_times: VecDeque::new(),
                max_requests: max_requests.max(1),
                window,
            }),
        }
    }

    pub fn per_second(max_requests: usize) -> Self {
        Self::new(max_requests, Duration::from_secs(1))
    }

    /// Wait until a request slot is free, then claim it
    pub async fn acquire(&self) {
        while let Err(wait_duration) = self.try_acquire().await {
            tracing::debug!("Provider rate limit: waiting {}ms", wait_duration.as_millis());
            tokio::time::sleep(wait_duration).await;
        }
    }

    /// Claim a slot without waiting. Returns the wait time if the window is full.
    pub async fn try_acquire(&self) -> Result<(), Duration> {
        let mut window = self.inner.lock().await;
        match window.check_and_record(Instant::now()) {
            wait if wait.is_zero() => Ok(()),
            wait => Err(wait),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rate_limiter_allows_requests_within_limit() {
        let limiter = RateLimiter::per_second(5);

        for _ in 0..5 {
            assert!(limiter.try_acquire().await.is_ok());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::per_second(5);
        for _ in 0..5 {
            limiter.try_acquire().await.unwrap();
        }

        let wait = limiter.try_acquire().await.unwrap_err();
        assert!(wait > Duration::ZERO && wait <= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_waits_for_window_to_slide() {
        let limiter = RateLimiter::per_second(2);
        let start = Instant::now();

        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;

        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
