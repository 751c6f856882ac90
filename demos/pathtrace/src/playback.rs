//! Frame cursor over a finished step sequence.
//!
//! The cursor only tracks an index; the caller owns the clock and decides
//! when to call [`Playback::tick`].

/// Position and play state over `len` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    len:     usize,
    index:   usize,
    playing: bool,
}

impl Playback {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, playing: false }
    }

    /// Start advancing on ticks.  Playing from the final frame rewinds first.
    pub fn play(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.is_finished() {
            self.index = 0;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance one frame while playing.
    ///
    /// Returns the new index, or `None` when paused or already on the final
    /// frame.  Reaching the final frame pauses the cursor there.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.playing {
            return None;
        }
        if self.index + 1 >= self.len {
            self.playing = false;
            return None;
        }
        self.index += 1;
        if self.index + 1 == self.len {
            self.playing = false;
        }
        Some(self.index)
    }

    /// Jump to `index`, clamped to the last frame.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.playing = false;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True on the final frame (and always for an empty sequence).
    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.len
    }
}
