use crate::error::{Context, ErrorLocation};

/// Trait for errors that can be rendered as user-facing diagnostics.
///
/// Every stage of the front end reports problems through its own error types.
/// This trait is the common surface a printer or an editor integration uses to
/// display them.
pub trait AsDclError {
    /// Returns the primary, single-line message.
    fn message(&self) -> String;

    /// Returns notes and help text that accompany the message.
    ///
    /// Returns an empty vector if there is nothing to add.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns where in `source` the problem is located, if known.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
