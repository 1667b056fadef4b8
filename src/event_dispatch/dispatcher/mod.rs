pub mod config;
pub mod errors;
pub mod event_dispatcher;

pub use config::{DispatcherConfig, FailurePolicy};
pub use errors::{DispatchError, HandlerFailure};
pub use event_dispatcher::EventDispatcher;
