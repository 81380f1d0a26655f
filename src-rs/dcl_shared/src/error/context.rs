/// Extra information attached to a diagnostic.
///
/// A diagnostic carries one primary message. `Context` entries add what the
/// message alone cannot say: where something related was declared, or what
/// the author could write instead.
///
/// ```rust
/// use dcl_shared::error::Context;
///
/// let note = Context::Note("`version` was first declared here".to_string());
/// let help = Context::Help("use a different name for the second value".to_string());
/// assert_ne!(note, help);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary detail about the problem
    Note(String),
    /// A suggestion for fixing the problem
    Help(String),
}
