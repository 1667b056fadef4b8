use super::event::Event;

// ============================================================================
// Event Handler Trait
// ============================================================================

/// Reaction logic invoked once per matching `notify` call.
///
/// Handlers are shared as `Arc<dyn EventHandler>`; the dispatcher never owns
/// their lifecycle. A handler receives the event by shared reference and
/// reports failures through the returned `Result`.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event) -> anyhow::Result<()>;

    /// Name used in logs, metrics labels and dispatch errors
    fn name(&self) -> &'static str;
}
