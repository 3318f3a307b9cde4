use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::FilterType;
use image::{Delay, Frame};

use crate::errors::RenderError;
use crate::traits::AnimationRenderer;

/// One batch worth of rendering work. Built per batch immediately before
/// dispatch and consumed synchronously.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Frame sources, in animation order.
    pub frames: Vec<PathBuf>,
    /// Inter-frame delay in hundredths of a second.
    pub delay: u32,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Output file, created or silently overwritten.
    pub destination: PathBuf,
}

/// Renders a batch of stills into one animated gif.
///
/// Frames are decoded one at a time, resized to fit `(width, height)` while
/// keeping aspect ratio, given a uniform delay and streamed straight into
/// the encoder, so memory use stays bounded by a single frame.
pub struct GifRenderer;

impl AnimationRenderer for GifRenderer {
    /// Creates or overwrites `request.destination`.
    ///
    /// On a frame-load or encode failure the error carries the offending
    /// path; a partially written destination file may remain on disk.
    fn render(&self, request: &RenderRequest) -> Result<PathBuf, RenderError> {
        let file =
            File::create(&request.destination).map_err(|source| RenderError::CreateOutput {
                path: request.destination.clone(),
                source,
            })?;

        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), 10);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|source| RenderError::Encode {
                path: request.destination.clone(),
                source,
            })?;

        // Gif delays tick in hundredths of a second, Delay speaks ms.
        let delay = Delay::from_numer_denom_ms(request.delay.saturating_mul(10), 1);

        for path in &request.frames {
            let image = image::open(path).map_err(|source| RenderError::LoadFrame {
                path: path.clone(),
                source,
            })?;
            let resized = image.resize(request.width, request.height, FilterType::Lanczos3);
            let frame = Frame::from_parts(resized.into_rgba8(), 0, 0, delay);
            encoder
                .encode_frame(frame)
                .map_err(|source| RenderError::Encode {
                    path: request.destination.clone(),
                    source,
                })?;
        }

        Ok(request.destination.clone())
    }
}

/// Dry-run renderer: performs no image I/O and immediately reports the
/// destination as produced. Paths and counter progression match a real run
/// exactly; only the files are missing.
pub struct NoopRenderer;

impl AnimationRenderer for NoopRenderer {
    fn render(&self, request: &RenderRequest) -> Result<PathBuf, RenderError> {
        Ok(request.destination.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::io::BufReader;
    use std::path::Path;

    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;
    use tempfile::TempDir;

    fn write_still(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::DynamicImage::new_rgb8(8, 8).save(&path).unwrap();
        path
    }

    fn request(frames: Vec<PathBuf>, destination: PathBuf) -> RenderRequest {
        RenderRequest {
            frames,
            delay: 5,
            width: 16,
            height: 16,
            destination,
        }
    }

    #[test]
    fn renders_frames_into_an_animated_gif() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let frames = vec![
            write_still(temp_dir.path(), "a.jpg"),
            write_still(temp_dir.path(), "b.jpg"),
        ];
        let destination = temp_dir.path().join("out.gif");

        let produced = GifRenderer.render(&request(frames, destination.clone()))?;
        assert_eq!(produced, destination);

        let decoder = GifDecoder::new(BufReader::new(File::open(&destination)?))?;
        let decoded = decoder.into_frames().collect_frames()?;
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].buffer().width(), 16);
        assert_eq!(decoded[0].buffer().height(), 16);
        Ok(())
    }

    #[test]
    fn load_failure_names_the_offending_frame() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let good = write_still(temp_dir.path(), "good.jpg");
        let corrupt = temp_dir.path().join("corrupt.jpg");
        fs::write(&corrupt, b"this is not a jpeg")?;

        let destination = temp_dir.path().join("out.gif");
        let result = GifRenderer.render(&request(vec![good, corrupt.clone()], destination));

        match result {
            Err(RenderError::LoadFrame { path, .. }) => assert_eq!(path, corrupt),
            other => panic!("expected LoadFrame error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn noop_renderer_touches_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let destination = temp_dir.path().join("0.gif");

        let produced = NoopRenderer.render(&request(
            vec![temp_dir.path().join("missing.jpg")],
            destination.clone(),
        ))?;

        assert_eq!(produced, destination);
        assert!(!destination.exists());
        Ok(())
    }
}
