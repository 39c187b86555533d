//! Native window backed by minifb
//!
//! minifb exposes mouse state rather than an event queue, so pointer events
//! are synthesized after every present by comparing against the previous
//! frame's pointer position.

use std::collections::VecDeque;

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use super::Platform;
use crate::raster::{Canvas, FrameBuffer};
use crate::sim::InputEvent;

/// Buttons that count as "held" for a drag
const DRAG_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

pub struct NativeWindow {
    window: Window,
    pending: VecDeque<InputEvent>,
    last_pointer: Option<(f32, f32)>,
}

impl NativeWindow {
    /// Open a fixed-size window. Failure here is fatal to the caller.
    pub fn open(title: &str, width: usize, height: usize) -> Result<Self, minifb::Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        // Pacing comes from the frame loop's own delay
        window.set_target_fps(0);
        log::info!("Opened {width}x{height} window \"{title}\"");

        Ok(Self {
            window,
            pending: VecDeque::new(),
            last_pointer: None,
        })
    }

    /// Queue events for the state minifb picked up during the last update
    fn collect_events(&mut self) {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.pending.push_back(InputEvent::Quit);
        }

        let pointer = self.window.get_mouse_pos(MouseMode::Discard);
        if let Some((x, y)) = pointer.filter(|_| self.last_pointer != pointer) {
            let button_held = DRAG_BUTTONS.iter().any(|&b| self.window.get_mouse_down(b));
            self.pending.push_back(InputEvent::PointerMove {
                x: f64::from(x),
                y: f64::from(y),
                button_held,
            });
        }
        self.last_pointer = pointer;
    }
}

impl Platform for NativeWindow {
    type Error = minifb::Error;

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())?;
        self.collect_events();
        Ok(())
    }
}
