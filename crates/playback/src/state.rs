//! Playback state: tri-state status plus the track cursor.
//!
//! `PlayerState` is a pure, `Copy`, allocation-free value. It has no I/O; the
//! [`Controller`](crate::Controller) carries it across events and
//! [`apply`](crate::apply) computes the next one. Cursor arithmetic wraps
//! modulo the track count and never panics, including on an empty list.

/// Current playback status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackStatus {
    /// Nothing is loaded, or playback was explicitly stopped.
    Stopped,
    /// A track is loaded and decoding toward the accessory.
    Playing,
    /// A track is loaded but its pause flag is set.
    Paused,
}

impl PlaybackStatus {
    /// `true` while a track is loaded (playing or paused).
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }

    /// Log label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

/// Status and cursor over a list of `track_count` tracks.
///
/// Boots at cursor 0, [`PlaybackStatus::Stopped`]. Nothing is persisted
/// across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerState {
    cursor: usize,
    status: PlaybackStatus,
    track_count: usize,
}

impl PlayerState {
    /// Boot state for a list of `track_count` tracks.
    pub const fn new(track_count: usize) -> Self {
        Self {
            cursor: 0,
            status: PlaybackStatus::Stopped,
            track_count,
        }
    }

    /// Index of the selected track. Meaningless when the list is empty.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current status.
    pub const fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Length of the track list this state navigates.
    pub const fn track_count(&self) -> usize {
        self.track_count
    }

    /// `true` when there is nothing to navigate.
    pub const fn is_empty(&self) -> bool {
        self.track_count == 0
    }

    /// Same cursor, new status.
    #[must_use]
    pub const fn with_status(self, status: PlaybackStatus) -> Self {
        Self { status, ..self }
    }

    /// Cursor moved to `index`; `None` when out of range.
    #[must_use]
    pub fn selecting(self, index: usize) -> Option<Self> {
        (index < self.track_count).then_some(Self {
            cursor: index,
            ..self
        })
    }

    /// Cursor moved one forward, wrapping to 0 after the last track.
    #[must_use]
    pub fn advanced(self) -> Self {
        let cursor = self
            .cursor
            .checked_add(1)
            .and_then(|next| next.checked_rem(self.track_count))
            .unwrap_or(0);
        Self { cursor, ..self }
    }

    /// Cursor moved one back, wrapping to the last track before 0.
    #[must_use]
    pub fn retreated(self) -> Self {
        let cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or_else(|| self.track_count.saturating_sub(1));
        Self { cursor, ..self }
    }
}
