//! Auto-hiding site header: hide while scrolling down, show on the way up.

use tracing::trace;

use crate::config::{DEFAULT_HEADER_JITTER_PX, DEFAULT_HEADER_TOP_OFFSET_PX};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderUpdate {
    pub hidden: bool,
    /// Value for the `--header-hide` custom property, in px.
    pub hide_offset_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderVisibility {
    last_y: f64,
    hidden: bool,
    frame_pending: bool,
    top_offset_px: f64,
    jitter_px: f64,
}

impl HeaderVisibility {
    #[must_use]
    pub fn new(initial_y: f64) -> Self {
        Self::with_thresholds(initial_y, DEFAULT_HEADER_TOP_OFFSET_PX, DEFAULT_HEADER_JITTER_PX)
    }

    #[must_use]
    pub fn with_thresholds(initial_y: f64, top_offset_px: f64, jitter_px: f64) -> Self {
        Self {
            last_y: initial_y,
            hidden: false,
            frame_pending: false,
            top_offset_px,
            jitter_px,
        }
    }

    #[must_use]
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Called for every raw scroll event. Returns `true` when the caller must
    /// schedule an animation frame; `false` means one is already pending and
    /// this event is coalesced into it.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Runs inside the animation frame.
    pub fn update(&mut self, y: f64, drawer_open: bool, header_height_px: f64) -> HeaderUpdate {
        let delta = y - self.last_y;
        self.last_y = y;
        self.frame_pending = false;

        if y < self.top_offset_px || drawer_open {
            self.hidden = false;
            return HeaderUpdate {
                hidden: false,
                hide_offset_px: 0.0,
            };
        }

        if delta.abs() > self.jitter_px {
            self.hidden = delta > 0.0;
        }
        trace!(y, delta, hidden = self.hidden, "header visibility updated");
        HeaderUpdate {
            hidden: self.hidden,
            hide_offset_px: header_height_px.max(0.0),
        }
    }
}
