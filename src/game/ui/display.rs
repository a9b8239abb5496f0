use std::path::Path;

use log::{debug, info};

use crate::error::GameError;
use crate::game::render::Surface;

/// Events reported by a display backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    Quit,
}

/// Where finished frames go.
pub trait Display {
    /// Drain pending events.
    fn poll_events(&mut self) -> Vec<DisplayEvent>;

    /// Show a finished frame.
    fn present(&mut self, frame: &Surface) -> Result<(), GameError>;

    /// Change the output size in pixels.
    fn set_mode(&mut self, width: u32, height: u32);

    fn set_caption(&mut self, _caption: &str) {}
}

/// Display that keeps frames in memory. Optionally asks to quit after a
/// fixed number of frames.
pub struct HeadlessDisplay {
    mode: (u32, u32),
    caption: String,
    frames_presented: u64,
    max_frames: Option<u64>,
    last_frame: Option<Surface>,
}

impl HeadlessDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            mode: (width, height),
            caption: String::new(),
            frames_presented: 0,
            max_frames: None,
            last_frame: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn mode(&self) -> (u32, u32) {
        self.mode
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_frame(&self) -> Option<&Surface> {
        self.last_frame.as_ref()
    }

    /// Write the last presented frame as a PNG file.
    pub fn save_last_frame(&self, path: &Path) -> Result<bool, GameError> {
        match &self.last_frame {
            Some(frame) => {
                frame.save(path)?;
                info!("[HeadlessDisplay] Saved frame {} to {}", self.frames_presented, path.display());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Display for HeadlessDisplay {
    fn poll_events(&mut self) -> Vec<DisplayEvent> {
        if self.max_frames.is_some_and(|max| self.frames_presented >= max) {
            vec![DisplayEvent::Quit]
        } else {
            Vec::new()
        }
    }

    fn present(&mut self, frame: &Surface) -> Result<(), GameError> {
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn set_mode(&mut self, width: u32, height: u32) {
        debug!("[HeadlessDisplay] Mode set to {}x{}", width, height);
        self.mode = (width, height);
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = caption.to_string();
    }
}
