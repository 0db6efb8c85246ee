// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const PER_SECOND: u64 = 10;
const BURST: u32 = 20;

/// Per-client-IP token bucket. `None` when the quota cannot be built.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(PER_SECOND);
    builder.burst_size(BURST);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}
