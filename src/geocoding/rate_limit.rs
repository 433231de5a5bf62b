//! Client-side request budget for the free geocoding services

use std::time::{Duration, Instant};

/// Sliding-window rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum requests per window
    max_requests: u32,
    /// Window length
    window: Duration,
    /// Request timestamps within the current window
    request_times: Vec<Instant>,
}

impl RateLimiter {
    /// Create a new rate limiter
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            request_times: Vec::new(),
        }
    }

    /// Limiter allowing `max_requests` per minute
    #[must_use]
    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Check if a request is allowed and record it
    pub fn allow_request(&mut self) -> bool {
        self.cleanup_old_requests();

        if self.request_times.len() >= self.max_requests as usize {
            false
        } else {
            self.request_times.push(Instant::now());
            true
        }
    }

    /// Get time until next request is allowed
    pub fn time_until_next_request(&mut self) -> Duration {
        self.cleanup_old_requests();

        if self.request_times.len() < self.max_requests as usize {
            return Duration::ZERO;
        }
        self.request_times
            .first()
            .map_or(Duration::ZERO, |oldest| {
                self.window.saturating_sub(oldest.elapsed())
            })
    }

    /// Drop requests that left the window
    fn cleanup_old_requests(&mut self) {
        let window = self.window;
        self.request_times
            .retain(|&time| time.elapsed() < window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter() {
        let mut limiter = RateLimiter::per_minute(2);

        // Should allow first 2 requests
        assert!(limiter.allow_request());
        assert!(limiter.allow_request());

        // Should deny 3rd request
        assert!(!limiter.allow_request());

        let wait_time = limiter.time_until_next_request();
        assert!(wait_time > Duration::ZERO);
        assert!(wait_time <= Duration::from_secs(60));
    }

    #[test]
    fn test_window_expiry() {
        let mut limiter = RateLimiter::new(1, Duration::from_millis(20));
        assert!(limiter.allow_request());
        assert!(!limiter.allow_request());

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(limiter.time_until_next_request(), Duration::ZERO);
        assert!(limiter.allow_request());
    }

    #[test]
    fn test_zero_budget_never_allows() {
        let mut limiter = RateLimiter::per_minute(0);
        assert!(!limiter.allow_request());
    }
}
