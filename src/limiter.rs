use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Windowed rate limiter: at most `max_requests` permits per `window`.
///
/// `acquire` blocks the calling thread until the current window has room,
/// matching the blocking remote-call model of the rest of the crate.
#[derive(Clone, Debug)]
pub(crate) struct RateLimiter {
    state: Arc<Mutex<Window>>,
    window: Duration,
    max_requests: usize,
}

#[derive(Debug)]
struct Window {
    issued: usize,
    opened_at: Instant,
}

/// Proof that a request was counted against the current window.
pub(crate) struct Permit;

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        RateLimiter {
            state: Arc::new(Mutex::new(Window {
                issued: 0,
                opened_at: Instant::now(),
            })),
            window,
            max_requests,
        }
    }

    /// Blocks until a permit is available in the current window.
    pub fn acquire(&self) -> Permit {
        loop {
            let wait = {
                let Ok(mut state) = self.state.lock() else {
                    continue;
                };
                let now = Instant::now();
                if now.duration_since(state.opened_at) >= self.window {
                    state.opened_at = now;
                    state.issued = 0;
                }
                if state.issued < self.max_requests {
                    state.issued += 1;
                    return Permit;
                }
                self.window - now.duration_since(state.opened_at)
            };
            std::thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn all_threads_eventually_acquire() {
        let limiter = RateLimiter::new(4, Duration::from_millis(50));
        let mut handles = vec![];

        for _ in 0..10 {
            let limiter = limiter.clone();
            handles.push(thread::spawn(move || {
                let _permit = limiter.acquire();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn window_refills_after_elapsing() {
        let limiter = RateLimiter::new(1, Duration::from_millis(10));
        let _first = limiter.acquire();
        // Second acquire must wait for the next window rather than deadlock.
        let _second = limiter.acquire();
    }
}
