// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and file drops are always routed. Wheel events are only
//! routed while brightness control is armed, and the fade tick only runs while
//! the level indicator is on screen.

use super::Message;
use crate::config::OVERLAY_FADE_TICK_MS;
use iced::{event, keyboard, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Pixels reported by a touchpad for the equivalent of one wheel notch.
const PIXELS_PER_NOTCH: f32 = 120.0;

/// Converts an iced scroll delta to a wheel notch count in the page
/// convention, where positive means the wheel moved down.
#[must_use]
pub fn wheel_notches(delta: mouse::ScrollDelta) -> f32 {
    let up = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
    };
    -up
}

fn route_key(event: &keyboard::Event, window_id: window::Id) -> Option<Message> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return None;
    };
    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::F11) => {
            Some(Message::ToggleFullscreen(window_id))
        }
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Escape(window_id)),
        keyboard::Key::Character(",") if modifiers.command() => Some(Message::OpenSettings),
        _ => None,
    }
}

/// Keyboard shortcuts and file drops.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(key_event) if status == event::Status::Ignored => {
            route_key(&key_event, window_id)
        }
        _ => None,
    })
}

/// Wheel events, only while brightness control is armed.
pub fn create_wheel_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window_id| match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            Some(Message::Wheel(wheel_notches(delta)))
        }
        _ => None,
    })
}

/// Fade tick, only while the level indicator is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(u64::from(OVERLAY_FADE_TICK_MS))).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn wheel_down_is_positive() {
        // iced reports a downward wheel notch as y = -1
        assert_abs_diff_eq!(wheel_notches(mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 }), 1.0);
        assert_abs_diff_eq!(wheel_notches(mouse::ScrollDelta::Lines { x: 0.0, y: 2.0 }), -2.0);
    }

    #[test]
    fn pixel_deltas_are_scaled_to_notches() {
        assert_abs_diff_eq!(
            wheel_notches(mouse::ScrollDelta::Pixels { x: 0.0, y: 120.0 }),
            -1.0
        );
        assert_abs_diff_eq!(
            wheel_notches(mouse::ScrollDelta::Pixels { x: 0.0, y: -60.0 }),
            0.5
        );
    }

    #[test]
    fn horizontal_scroll_is_neutral() {
        assert_abs_diff_eq!(
            wheel_notches(mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 }),
            0.0
        );
    }
}
