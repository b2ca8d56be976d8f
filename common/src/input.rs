use log::warn;
use winit::event::WindowEvent;
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, NativeKeyCode, PhysicalKey},
};

const NUM_KEYS: usize = 194;

pub struct Input {
    key_states: [KeyState; NUM_KEYS],
    // Set on every fresh press, survives a release in the same frame
    key_hits: [bool; NUM_KEYS],
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum KeyState {
    Released,
    Pressed,
    Repeat,
    JustReleased,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            key_states: [KeyState::Released; NUM_KEYS],
            key_hits: [false; NUM_KEYS],
        }
    }

    pub fn key_pressed(&self, key_code: KeyCode) -> bool {
        self.key_states[key_code as usize] == KeyState::Pressed
    }

    pub fn key_released(&self, key_code: KeyCode) -> bool {
        self.key_states[key_code as usize] == KeyState::Released
    }

    pub fn key_down(&self, key_code: KeyCode) -> bool {
        let state = self.key_states[key_code as usize];
        state == KeyState::Pressed || state == KeyState::Repeat
    }

    pub fn key_just_released(&self, key_code: KeyCode) -> bool {
        self.key_states[key_code as usize] == KeyState::JustReleased
    }

    /// Whether the key went down since the last `reset_internal_state`, even if it is already up again.
    pub fn key_hit(&self, key_code: KeyCode) -> bool {
        self.key_hits[key_code as usize]
    }

    /// Call once per frame after the frame's input has been consumed.
    pub fn reset_internal_state(&mut self) {
        for key_state in self.key_states.iter_mut() {
            if *key_state == KeyState::JustReleased {
                *key_state = KeyState::Released;
            }
        }

        self.key_hits = [false; NUM_KEYS];
    }

    pub fn process_window_event(&mut self, window_event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = window_event {
            self.process_key_event(event);
        }
    }

    fn process_key_event(&mut self, key_event: &KeyEvent) {
        match key_event.physical_key {
            PhysicalKey::Code(key_code) => self.update_key_state(key_code, key_event.state),
            PhysicalKey::Unidentified(native_key_code) => {
                let (platform, code) = match native_key_code {
                    NativeKeyCode::Windows(code) => ("Windows", code as u32),
                    NativeKeyCode::MacOS(code) => ("MacOS", code as u32),
                    NativeKeyCode::Android(code) => ("Android", code),
                    NativeKeyCode::Xkb(code) => ("XKB", code),
                    NativeKeyCode::Unidentified => return warn!("Unidentified key event received"),
                };

                warn!("Unidentified {} key event {}", platform, code)
            }
        }
    }

    fn update_key_state(&mut self, key_code: KeyCode, state: ElementState) {
        let index = key_code as usize;
        if index >= NUM_KEYS {
            return warn!("Ignoring out of range key code {:?}", key_code);
        }

        let old_state = self.key_states[index];

        let new_state = match state {
            ElementState::Pressed => {
                if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                    KeyState::Repeat
                } else {
                    KeyState::Pressed
                }
            }
            ElementState::Released => {
                if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                    KeyState::JustReleased
                } else {
                    KeyState::Released
                }
            }
        };

        if new_state == KeyState::Pressed {
            self.key_hits[index] = true;
        }

        self.key_states[index] = new_state;
    }
}
