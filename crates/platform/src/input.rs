//! Input device abstraction

/// Input device trait for debounced buttons.
///
/// Debouncing and click/long-press classification happen inside the
/// implementation; the player only sees edge events.
pub trait InputDevice {
    /// Next pending edge event (non-blocking).
    ///
    /// Called repeatedly every loop iteration until it returns `None`.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Edge events from buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Short press and release
    Click(Button),
    /// Button held past the long-press threshold
    LongPress(Button),
}

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Next track / play (long press stops)
    Next,
    /// Previous track
    Previous,
    /// Optional dedicated pause/resume button
    PlayPause,
}
