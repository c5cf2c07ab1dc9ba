//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between the clock face and the debug view.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The animated clock face.
    #[default]
    Face,

    /// Tick timing, event counters and the event log.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Face => "Page: Face",
            Self::Debug => "Page: Debug",
        }
    }
}
