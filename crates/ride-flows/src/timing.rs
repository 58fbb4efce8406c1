use std::time::Duration;

const DEFAULT_SEARCH_DELAY_MS: u64 = 1500;
const DEFAULT_CELEBRATION_CLEAR_SECS: u64 = 5;

/// Timing knobs for the two timed transitions.
#[derive(Debug, Clone)]
pub struct FlowTiming {
    /// How long the ride search stays in `Loading` before results appear.
    pub search_delay: Duration,
    /// How long the post-confirmation celebration stays raised.
    pub celebration_clear: Duration,
}

impl Default for FlowTiming {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            celebration_clear: Duration::from_secs(DEFAULT_CELEBRATION_CLEAR_SECS),
        }
    }
}
