//! Simulated network conditions for the movie service.
//!
//! The catalog is local, but callers are written as if it sat behind a
//! remote API: every endpoint has a latency, and the recommendation endpoint
//! can fail. `NetworkPolicy` isolates those effects so tests can run with
//! zero delay and a forced outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;

/// The service operations that go through the simulated network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Recommendations,
    Search,
    Trending,
    /// The chat bot "thinking" before it asks for recommendations
    ChatCompose,
}

pub trait NetworkPolicy: Send + Sync {
    /// How long a call to `endpoint` takes
    fn latency(&self, endpoint: Endpoint) -> Duration;

    /// Whether this call to `endpoint` fails
    fn should_fail(&self, endpoint: Endpoint) -> bool;
}

/// Default failure probability of the recommendation endpoint
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Random latency and failure injection, mirroring a flaky remote API.
///
/// - Recommendations: 700-1200 ms, fails with `failure_rate`
/// - Search: 300 ms
/// - Trending: 500 ms
/// - Chat compose: 1500 ms
#[derive(Debug, Clone)]
pub struct SimulatedNetwork {
    failure_rate: f64,
    delays: bool,
}

impl SimulatedNetwork {
    pub fn new() -> Self {
        Self {
            failure_rate: DEFAULT_FAILURE_RATE,
            delays: true,
        }
    }

    /// Configure the failure probability, clamped to [0, 1] (default: 0.1)
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Turn the simulated delays on or off (default: on)
    pub fn with_delays(mut self, delays: bool) -> Self {
        self.delays = delays;
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkPolicy for SimulatedNetwork {
    fn latency(&self, endpoint: Endpoint) -> Duration {
        if !self.delays {
            return Duration::ZERO;
        }
        let millis = match endpoint {
            Endpoint::Recommendations => rand::rng().random_range(700..1200),
            Endpoint::Search => 300,
            Endpoint::Trending => 500,
            Endpoint::ChatCompose => 1500,
        };
        Duration::from_millis(millis)
    }

    fn should_fail(&self, endpoint: Endpoint) -> bool {
        endpoint == Endpoint::Recommendations && rand::rng().random_bool(self.failure_rate)
    }
}

/// Zero-latency policy with a switchable recommendation outcome.
#[derive(Debug, Default)]
pub struct InstantNetwork {
    failing: AtomicBool,
}

impl InstantNetwork {
    /// Every call succeeds
    pub fn reliable() -> Self {
        Self {
            failing: AtomicBool::new(false),
        }
    }

    /// Every recommendation call fails
    pub fn failing() -> Self {
        Self {
            failing: AtomicBool::new(true),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl NetworkPolicy for InstantNetwork {
    fn latency(&self, _endpoint: Endpoint) -> Duration {
        Duration::ZERO
    }

    fn should_fail(&self, endpoint: Endpoint) -> bool {
        endpoint == Endpoint::Recommendations && self.failing.load(Ordering::SeqCst)
    }
}
