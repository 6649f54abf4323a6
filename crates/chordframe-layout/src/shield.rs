//! Counted suppression of frame pointer input during drags.
//!
//! `<iframe>`s capture pointer events that cross them, which would stall a
//! drag as soon as the pointer enters a frame. Every active drag session
//! holds the shield; the first holder disables frame interaction and text
//! selection, the last one to let go restores both.

use tracing::debug;

use crate::host::LayoutHost;

#[derive(Debug, Default)]
pub struct FrameShield {
    holders: u32,
}

impl FrameShield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engage<H: LayoutHost>(&mut self, host: &mut H) {
        if self.holders == 0 {
            host.set_frames_interactive(false);
            host.set_text_selection(false);
        }
        self.holders += 1;
    }

    /// Drop one hold. Returns `true` when this restored the frames.
    pub fn lift<H: LayoutHost>(&mut self, host: &mut H) -> bool {
        match self.holders {
            0 => {
                debug!("frame shield lifted while not engaged");
                false
            }
            1 => {
                self.holders = 0;
                host.set_frames_interactive(true);
                host.set_text_selection(true);
                true
            }
            _ => {
                self.holders -= 1;
                false
            }
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> u32 {
        self.holders
    }
}
