//! Observability for meetbot: tracing subscriber setup with optional
//! OpenTelemetry export.

pub mod tracing_setup;

/// Span name for one inbound chat message.
pub const SPAN_HANDLE_MESSAGE: &str = "handle_message";
