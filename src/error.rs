//! Error type for fallible sketch operations.

/// Error returned by the drawing facade, the surface backends, and the
/// browser glue.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// `pop()` was called with no saved style frame left to restore.
    #[error("style stack underflow: pop() without a matching push()")]
    StackUnderflow,
    /// The rendering surface rejected a drawing or transform call.
    #[error("surface rejected {op}: {detail}")]
    Surface {
        /// Name of the surface operation that failed (e.g. `"arc"`).
        op: &'static str,
        /// Backend-specific failure description.
        detail: String,
    },
    /// No canvas element matched the given selector.
    #[error("no canvas element matches selector {0:?}")]
    CanvasNotFound(String),
    /// The canvas element did not yield a 2D rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// No global window or document (not running in a browser).
    #[error("browser window unavailable")]
    WindowUnavailable,
}
