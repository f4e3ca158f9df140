//! Preview handle contract.
//!
//! A preview handle owns a surface-level resource (a browser object URL, for
//! example). It is released by dropping it, so the state machine only has to
//! make sure stale handles leave its hands.

/// Produces preview handles for image files.
///
/// [`crate::Uploader`] only calls [`PreviewSource::acquire`] for accepted
/// files whose MIME type is an image, and always drops the previous handle
/// first.
pub trait PreviewSource<F> {
    /// Revocable handle; releases its resource on drop.
    type Handle;

    /// Allocate a handle for `file`, or `None` when no preview can be made.
    fn acquire(&mut self, file: &F) -> Option<Self::Handle>;
}

/// Preview source for surfaces that cannot render images.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreview;

impl<F> PreviewSource<F> for NoPreview {
    type Handle = std::convert::Infallible;

    fn acquire(&mut self, _file: &F) -> Option<Self::Handle> {
        None
    }
}
