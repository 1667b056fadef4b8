// ============================================================================
// Dispatcher Configuration
// ============================================================================

/// What `notify` does when a handler returns an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing handler and return its error
    FailFast,
    /// Run every handler, then report all failures together
    ContinueOnError,
}

#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    /// Handler failure policy for `notify`
    pub failure_policy: FailurePolicy,
    /// Log events that have no registered handlers at WARN instead of DEBUG
    pub warn_on_unhandled: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::FailFast,
            warn_on_unhandled: false,
        }
    }
}

impl DispatcherConfig {
    /// Stop notifying on the first handler failure
    pub fn fail_fast() -> Self {
        Self::default()
    }

    /// Keep notifying the remaining handlers when one fails
    pub fn isolated() -> Self {
        Self {
            failure_policy: FailurePolicy::ContinueOnError,
            ..Self::default()
        }
    }

    pub fn with_warn_on_unhandled(mut self, warn: bool) -> Self {
        self.warn_on_unhandled = warn;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fail_fast() {
        let config = DispatcherConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert!(!config.warn_on_unhandled);
    }

    #[test]
    fn test_fail_fast_preset_matches_default() {
        let config = DispatcherConfig::fail_fast();
        assert_eq!(config.failure_policy, DispatcherConfig::default().failure_policy);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert!(!config.warn_on_unhandled);
    }

    #[test]
    fn test_isolated_preset() {
        let config = DispatcherConfig::isolated().with_warn_on_unhandled(true);
        assert_eq!(config.failure_policy, FailurePolicy::ContinueOnError);
        assert!(config.warn_on_unhandled);
    }
}
