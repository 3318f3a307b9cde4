use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::RenderError;
use crate::renderer::RenderRequest;

/// The rendering seam of the pipeline.
///
/// The orchestrator depends on this single operation rather than a concrete
/// encoder, so the expensive gif encoding can be swapped for a no-op or a
/// recording mock without touching batching logic.
pub trait AnimationRenderer: Send + Sync {
    /// Renders one batch of frames into the animation at
    /// `request.destination`, returning the destination on success.
    fn render(&self, request: &RenderRequest) -> Result<PathBuf, RenderError>;
}

impl<R: AnimationRenderer + ?Sized> AnimationRenderer for Arc<R> {
    fn render(&self, request: &RenderRequest) -> Result<PathBuf, RenderError> {
        (**self).render(request)
    }
}
