pub mod batch;
pub mod config;
pub mod errors;
pub mod naming;
pub mod renderer;
pub mod traits;

pub mod mocks;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

pub use config::Config;
pub use errors::{CreateGifError, RenderError, Result};
pub use naming::OutputNamer;
pub use renderer::{GifRenderer, NoopRenderer, RenderRequest};
pub use traits::AnimationRenderer;

/// Drives one whole conversion run: list the source directory, partition the
/// file list, render batch by batch.
pub struct BatchConverter<R: AnimationRenderer> {
    renderer: R,
    config: Config,
}

impl<R: AnimationRenderer> BatchConverter<R> {
    pub const fn new(renderer: R, config: Config) -> Self {
        Self { renderer, config }
    }

    /// Runs a single conversion pass over the source directory.
    ///
    /// Batches are dispatched strictly one at a time and in order; the n-th
    /// render only starts once the (n-1)-th has fully completed. The first
    /// render failure aborts the run and the remaining batches are never
    /// attempted; outputs already written stay on disk. On success the
    /// returned paths are `0.gif, 1.gif, …` under the destination directory,
    /// in batch order.
    pub fn convert_directory(&self) -> Result<Vec<PathBuf>> {
        let src_dir = &self.config.src_dir;
        let dest_dir = &self.config.dest_dir;

        if !src_dir.is_dir() {
            return Err(CreateGifError::InvalidDirectory {
                path: src_dir.clone(),
            });
        }
        if !dest_dir.is_dir() {
            return Err(CreateGifError::InvalidDirectory {
                path: dest_dir.clone(),
            });
        }

        println!("Reading images from {}", src_dir.display());
        let files = self.collect_image_files()?;
        println!("{} images in directory", files.len());

        let batches = batch::partition(&files, self.config.max as usize);
        println!("Creating {} gifs...", batches.len());
        if batches.is_empty() {
            return Ok(Vec::new());
        }

        let pb = ProgressBar::new(batches.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut namer = OutputNamer::new(dest_dir);
        let mut outputs = Vec::with_capacity(batches.len());

        for (batch_index, frames) in batches.into_iter().enumerate() {
            let request = RenderRequest {
                frames,
                delay: self.config.delay,
                width: self.config.width,
                height: self.config.height,
                destination: namer.next_destination(),
            };

            let destination =
                self.renderer
                    .render(&request)
                    .map_err(|source| CreateGifError::Render {
                        batch_index,
                        destination: request.destination.clone(),
                        source,
                    })?;

            outputs.push(destination);
            pb.inc(1);
        }

        pb.finish();
        Ok(outputs)
    }

    /// Lists the source files eligible for conversion: regular files directly
    /// inside the source directory, `.jpg` suffix only, sorted by file name
    /// so batch contents are deterministic across runs.
    fn collect_image_files(&self) -> Result<Vec<PathBuf>> {
        let src_dir = &self.config.src_dir;
        let mut files = Vec::new();

        for entry in WalkDir::new(src_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| CreateGifError::Listing {
                path: src_dir.clone(),
                source,
            })?;
            if entry.file_type().is_file() && is_source_image(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

impl BatchConverter<GifRenderer> {
    pub const fn with_gif_renderer(config: Config) -> Self {
        Self::new(GifRenderer, config)
    }
}

/// Only file names with the case-sensitive `.jpg` suffix count as sources;
/// `.JPG`, `.jpeg` and everything else is skipped.
pub fn is_source_image(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".jpg"))
}
