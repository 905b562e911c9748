use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request: method, path, status and latency in microseconds.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_us = saturating_micros(started.elapsed()),
        "request handled"
    );

    response
}

/// Whole microseconds, clamped to `u64::MAX`.
fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_is_reported_in_whole_microseconds() {
        assert_eq!(saturating_micros(Duration::from_nanos(1_999)), 1);
        assert_eq!(saturating_micros(Duration::from_millis(3)), 3_000);
    }

    #[test]
    fn latency_saturates_instead_of_wrapping() {
        assert_eq!(saturating_micros(Duration::MAX), u64::MAX);
        assert_eq!(
            saturating_micros(Duration::from_micros(u64::MAX)),
            u64::MAX
        );
    }
}
