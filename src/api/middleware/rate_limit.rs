//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, bail};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter wrapped around every route.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the API.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens replenished per second
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Fails if either limit is zero.
pub fn layer(per_second: u32, burst: u32) -> anyhow::Result<RateLimitLayer> {
    if per_second == 0 {
        bail!("Rate limit values must be greater than zero");
    }

    // one token is replenished every `period`
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(Duration::from_secs(1) / per_second)
            .burst_size(burst)
            .finish()
            .context("Rate limit values must be greater than zero")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_limits() {
        assert!(layer(10, 100).is_ok());
    }

    #[test]
    fn test_zero_limits_are_errors() {
        assert!(layer(10, 0).is_err());
        assert!(layer(0, 100).is_err());
    }
}
