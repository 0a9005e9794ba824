// src/render_buffers.rs
// Per-draw vertex buffers. Every draw call of a frame gets its own buffer
// and re-uploads all of its data; buffers are only recycled across frames.
use crate::error::{Result, SetupError};

#[derive(Debug)]
pub struct BufferPool<T> {
    buffers: Vec<T>,
    in_use: usize,
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self {
            buffers: Vec::new(),
            in_use: 0,
        }
    }
}

impl<T> BufferPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every buffer to the pool. Call once per frame.
    pub fn begin_frame(&mut self) {
        self.in_use = 0;
    }

    /// Hands out a buffer nobody else holds this frame, creating one when the
    /// pool is exhausted.
    pub fn acquire(&mut self, create: impl FnOnce() -> Option<T>) -> Result<&T> {
        if self.in_use == self.buffers.len() {
            let buffer = create().ok_or(SetupError::BufferAllocation)?;
            self.buffers.push(buffer);
            log::debug!("buffer pool grew to {}", self.buffers.len());
        }
        let buffer = &self.buffers[self.in_use];
        self.in_use += 1;
        Ok(buffer)
    }

    pub fn in_use(&self) -> usize {
        self.in_use
    }

    pub fn capacity(&self) -> usize {
        self.buffers.len()
    }

    /// Removes every buffer, e.g. to delete them on context teardown.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.in_use = 0;
        self.buffers.drain(..)
    }
}
