// ============================================================================
// Dispatch Errors
// ============================================================================

/// A single handler failure collected during `notify`
#[derive(Debug)]
pub struct HandlerFailure {
    pub handler: &'static str,
    pub error: anyhow::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Event name cannot be empty")]
    EmptyEventName,

    #[error("Handler {handler} failed for {event_name}: {error:#}")]
    HandlerFailed {
        event_name: String,
        handler: &'static str,
        error: anyhow::Error,
    },

    #[error("{} handler(s) failed for {event_name}", .failures.len())]
    HandlersFailed {
        event_name: String,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    /// Names of the handlers that failed, in invocation order
    pub fn failed_handlers(&self) -> Vec<&'static str> {
        match self {
            DispatchError::EmptyEventName => Vec::new(),
            DispatchError::HandlerFailed { handler, .. } => vec![*handler],
            DispatchError::HandlersFailed { failures, .. } => {
                failures.iter().map(|f| f.handler).collect()
            }
        }
    }
}
