//! Animated GIF output.
//!
//! An [`Animation`] is idle until [`Animation::begin`] opens its file, and
//! records until [`Animation::close`]. One frame is always held back as
//! pending: a following frame with identical pixels only extends the
//! pending frame's delay, so static stretches cost a single stored frame.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::canvas::Canvas;
use crate::codec::{export_palette, gif_frame, gif_palette, gif_size};
use crate::config::DEFAULT_FRAME_DELAY;
use crate::error::{DrawError, Result};

struct Pending {
    canvas: Canvas,
    delay: u32,
}

struct Recorder {
    encoder: gif::Encoder<BufWriter<File>>,
    global_palette: Vec<u8>,
    size: (u32, u32),
    pending: Option<Pending>,
}

impl Recorder {
    fn flush_pending(&mut self) -> Result<bool> {
        let Some(pending) = self.pending.take() else {
            return Ok(false);
        };
        let delay = u16::try_from(pending.delay).unwrap_or_else(|_| {
            warn!("frame delay {} exceeds the GIF maximum, clamped to {}", pending.delay, u16::MAX);
            u16::MAX
        });
        let palette = gif_palette(&export_palette(&pending.canvas));
        let local = (palette != self.global_palette).then_some(palette);
        let mut frame = gif_frame(&pending.canvas, delay, local)?;
        // Each frame replaces the whole picture, transparent pixels included.
        frame.dispose = gif::DisposalMethod::Background;
        self.encoder.write_frame(&frame)?;
        debug!("wrote animation frame, delay {delay}");
        Ok(true)
    }

    fn finish(mut self) -> Result<usize> {
        let flushed = usize::from(self.flush_pending()?);
        let mut writer = self.encoder.into_inner()?;
        writer.flush()?;
        Ok(flushed)
    }
}

// ============================================================================
// Animation
// ============================================================================

/// Writes a looping GIF animation frame by frame.
pub struct Animation {
    path: PathBuf,
    recorder: Option<Recorder>,
    frames_written: usize,
}

impl Animation {
    /// An idle animation bound to `path`. Nothing is created on disk until
    /// [`begin`](Self::begin).
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            recorder: None,
            frames_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Frames actually written to the file. Coalesced duplicates and the
    /// pending frame are not counted.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Create (or truncate) the output file and hold `first` as the pending
    /// frame. The animation size and global color table come from `first`.
    pub fn begin(&mut self, first: &Canvas, delay: u32) -> Result<()> {
        if self.recorder.is_some() {
            return Err(DrawError::AnimationState("begin called while already recording"));
        }
        let (width, height) = gif_size(first)?;
        let global_palette = gif_palette(&export_palette(first));
        let file = File::create(&self.path)?;
        let mut encoder = gif::Encoder::new(BufWriter::new(file), width, height, &global_palette)?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        debug!("began animation {} at {width}x{height}", self.path.display());

        self.frames_written = 0;
        self.recorder = Some(Recorder {
            encoder,
            global_palette,
            size: first.size(),
            pending: Some(Pending {
                canvas: first.clone(),
                delay,
            }),
        });
        Ok(())
    }

    /// Add a frame shown for the default delay.
    pub fn add_frame(&mut self, frame: &Canvas) -> Result<()> {
        self.add_frame_with_delay(frame, DEFAULT_FRAME_DELAY)
    }

    /// Add a frame shown for `delay` hundredths of a second.
    pub fn add_frame_with_delay(&mut self, frame: &Canvas, delay: u32) -> Result<()> {
        let recorder = self
            .recorder
            .as_mut()
            .ok_or(DrawError::AnimationState("add_frame called before begin"))?;
        if frame.size() != recorder.size {
            return Err(DrawError::Shape {
                expected: format!("{}x{} frame", recorder.size.0, recorder.size.1),
                got: format!("{}x{}", frame.width(), frame.height()),
            });
        }
        if let Some(pending) = recorder.pending.as_mut() {
            if pending.canvas.equals(frame) {
                pending.delay = pending.delay.saturating_add(delay);
                return Ok(());
            }
        }
        if recorder.flush_pending()? {
            self.frames_written += 1;
        }
        recorder.pending = Some(Pending {
            canvas: frame.clone(),
            delay,
        });
        Ok(())
    }

    /// Write the pending frame and the GIF trailer, and release the file.
    pub fn close(&mut self) -> Result<()> {
        let recorder = self
            .recorder
            .take()
            .ok_or(DrawError::AnimationState("close called before begin"))?;
        self.frames_written += recorder.finish()?;
        debug!(
            "closed animation {} with {} frames",
            self.path.display(),
            self.frames_written
        );
        Ok(())
    }

    /// Return to idle, optionally binding a new output path. A recording in
    /// progress is finished first so the old file stays a valid GIF.
    pub fn reset(&mut self, path: Option<&Path>) -> Result<()> {
        if self.recorder.is_some() {
            self.close()?;
        }
        if let Some(path) = path {
            self.path = path.to_path_buf();
        }
        self.frames_written = 0;
        debug!("reset animation to {}", self.path.display());
        Ok(())
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            if let Err(e) = recorder.finish() {
                warn!("failed to finish animation {}: {e}", self.path.display());
            }
        }
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("path", &self.path)
            .field("recording", &self.is_recording())
            .field("frames_written", &self.frames_written)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
