use std::path::PathBuf;
use thiserror::Error;

/// Error types for the gif batching pipeline.
///
/// Each variant captures the context of its failure domain (directory
/// validation, listing, rendering) so callers never have to parse error
/// strings. Every error is fatal to the run: nothing is swallowed, nothing
/// is retried.
#[derive(Error, Debug)]
pub enum CreateGifError {
    /// Source or destination path is missing or not a directory. Raised
    /// before any work begins.
    #[error("{path:?} is not a directory")]
    InvalidDirectory { path: PathBuf },

    /// Reading the source directory failed. Raised before partitioning.
    #[error("failed to list images in {path:?}")]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Rendering one batch failed. The run stops here; outputs already
    /// written for earlier batches stay on disk.
    #[error("rendering batch {batch_index} to {destination:?} failed")]
    Render {
        batch_index: usize,
        destination: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Failure inside a single render call, carrying the underlying cause.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to create output file {path:?}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load frame {path:?}")]
    LoadFrame {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode animation {path:?}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, CreateGifError>;
