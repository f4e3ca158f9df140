//! Candidate file abstraction.

/// A locally chosen file as seen by the validator and the state machine.
///
/// Browser builds wrap a `web_sys::File`; the CLI wraps a path on disk. The
/// metadata is read once when the wrapper is built, so accessors are cheap.
pub trait CandidateFile {
    /// Display name (no directory components).
    fn name(&self) -> &str;

    /// Declared MIME type, e.g. `image/png`. May be empty when unknown.
    fn mime_type(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;
}
