use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::RenderError;
use crate::renderer::RenderRequest;
use crate::traits::AnimationRenderer;

/// Recording renderer for tests.
///
/// Remembers every request it receives and can be told to fail at a given
/// invocation index, which is how fail-fast behavior is exercised without
/// touching the filesystem. Wrap it in an `Arc` to keep a handle for
/// assertions after handing it to a converter.
#[derive(Debug, Default)]
pub struct MockRenderer {
    requests: Mutex<Vec<RenderRequest>>,
    fail_at: Option<usize>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the `index`-th render call (0-based) with a synthetic error.
    pub fn failing_at(index: usize) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    /// Number of render calls received so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of every request received so far, in call order.
    pub fn requests(&self) -> Vec<RenderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl AnimationRenderer for MockRenderer {
    fn render(&self, request: &RenderRequest) -> Result<PathBuf, RenderError> {
        let mut requests = self.requests.lock().unwrap();
        let index = requests.len();
        requests.push(request.clone());

        if self.fail_at == Some(index) {
            return Err(RenderError::CreateOutput {
                path: request.destination.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "injected render failure",
                ),
            });
        }

        Ok(request.destination.clone())
    }
}
