//! Inbound control events.
//!
//! Every source that can change playback (local buttons, accessory transport
//! statuses, natural end-of-stream) is reduced to one [`ControlEvent`] before
//! it reaches [`apply`](crate::apply).

use bluetooth::AvrcpStatus;

/// A single request to change playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Accessory "stopped"
    Stop,
    /// Accessory "playing": start when stopped, resume when paused
    PlayOrResume,
    /// Accessory "paused": toggles pause while a track is loaded
    Pause,
    /// Accessory seek-forward
    SkipNext,
    /// Accessory seek-backward
    SkipPrev,
    /// Next button click: start at the cursor when stopped, else next track
    ClickNext,
    /// Next button long press: stop
    LongPressNext,
    /// Previous button click
    ClickPrev,
    /// Dedicated pause/resume button: start when stopped, else toggle pause
    ClickPlayPause,
    /// Play the track at this index
    Select(usize),
    /// The engine reported the current stream exhausted
    TrackFinished,
}

impl ControlEvent {
    /// Log label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::PlayOrResume => "play/resume",
            Self::Pause => "pause",
            Self::SkipNext => "skip next",
            Self::SkipPrev => "skip previous",
            Self::ClickNext => "next button",
            Self::LongPressNext => "next button (long press)",
            Self::ClickPrev => "previous button",
            Self::ClickPlayPause => "play/pause button",
            Self::Select(_) => "select track",
            Self::TrackFinished => "track finished",
        }
    }
}

impl From<AvrcpStatus> for ControlEvent {
    fn from(status: AvrcpStatus) -> Self {
        match status {
            AvrcpStatus::Stopped => Self::Stop,
            AvrcpStatus::Playing => Self::PlayOrResume,
            AvrcpStatus::Paused => Self::Pause,
            AvrcpStatus::FwdSeek => Self::SkipNext,
            AvrcpStatus::RevSeek => Self::SkipPrev,
        }
    }
}
