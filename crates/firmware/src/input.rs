//! Button edge to control event mapping.
//!
//! | Edge                   | Event            |
//! |------------------------|------------------|
//! | `Click(Next)`          | `ClickNext`      |
//! | `LongPress(Next)`      | `LongPressNext`  |
//! | `Click(Previous)`      | `ClickPrev`      |
//! | `Click(PlayPause)`     | `ClickPlayPause` |
//!
//! Long presses on the other buttons have no binding.

use platform::{Button, InputEvent};
use playback::ControlEvent;

/// Control event bound to a button edge, if any.
pub fn control_event(event: InputEvent) -> Option<ControlEvent> {
    match event {
        InputEvent::Click(Button::Next) => Some(ControlEvent::ClickNext),
        InputEvent::LongPress(Button::Next) => Some(ControlEvent::LongPressNext),
        InputEvent::Click(Button::Previous) => Some(ControlEvent::ClickPrev),
        InputEvent::Click(Button::PlayPause) => Some(ControlEvent::ClickPlayPause),
        InputEvent::LongPress(Button::Previous | Button::PlayPause) => None,
    }
}
