use std::time::Duration;

use crate::error::CoreError;

/// Upper bound for a single backoff sleep.
pub const MAX_BACKOFF: Duration = Duration::from_secs(300);

#[must_use]
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Whether a failed request may be sent again. `attempt` counts retries
/// already made.
#[must_use]
pub fn should_retry(err: &CoreError, attempt: u32, max_retries: u32) -> bool {
    if attempt >= max_retries {
        return false;
    }
    match err {
        CoreError::Http { status, .. } => is_retryable_status(*status),
        CoreError::Transport(source) => {
            source.is_connect() || source.is_timeout() || source.is_request()
        }
        _ => false,
    }
}

/// `base_ms * 2^attempt`, capped at [`MAX_BACKOFF`].
#[must_use]
pub fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    let factor = 1_u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(base_ms.saturating_mul(factor)).min(MAX_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> CoreError {
        CoreError::Http {
            status,
            url: "https://data-nsr.udir.no/v3/enheter".to_string(),
        }
    }

    #[test]
    fn server_errors_and_throttling_are_retried() {
        assert!(should_retry(&http(500), 0, 5));
        assert!(should_retry(&http(503), 4, 5));
        assert!(should_retry(&http(429), 1, 5));
    }

    #[test]
    fn client_errors_and_exhausted_budget_are_not_retried() {
        assert!(!should_retry(&http(404), 0, 5));
        assert!(!should_retry(&http(400), 0, 5));
        assert!(!should_retry(&http(503), 5, 5));
        assert!(!should_retry(&http(503), 0, 0));
        assert!(!should_retry(&CoreError::Validation("bad".to_string()), 0, 5));
    }

    #[test]
    fn backoff_doubles_and_is_capped() {
        assert_eq!(backoff_delay(5_000, 0), Duration::from_secs(5));
        assert_eq!(backoff_delay(5_000, 1), Duration::from_secs(10));
        assert_eq!(backoff_delay(5_000, 3), Duration::from_secs(40));
        assert_eq!(backoff_delay(5_000, 6), MAX_BACKOFF);
        assert_eq!(backoff_delay(5_000, 64), MAX_BACKOFF);
        assert_eq!(backoff_delay(0, 3), Duration::ZERO);
    }
}
