//! Frame sinks: where rendered frames go.

use anyhow::Result;

use crate::fb::FrameBuffer;
use crate::river_view::Viewport;

/// Consumer of rendered frames.
pub trait FrameSink {
    /// Size the next frame should be rendered at.
    fn viewport(&self) -> Viewport;

    /// Present a frame. The sink may swap contents with `fb`.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

/// Keeps every presented frame in memory.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    viewport: Viewport,
    frames: Vec<FrameBuffer>,
}

impl RecordingSink {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }
}

impl FrameSink for RecordingSink {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}
