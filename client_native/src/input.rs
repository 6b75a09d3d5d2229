//! Keyboard state and paddle key bindings

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Up/down key pair driving one paddle
#[derive(Debug, Clone, Copy)]
pub struct PlayerKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

/// Fixed bindings: A/Z for the left paddle, K/M for the right
pub const PLAYER_KEYS: [PlayerKeys; 2] = [
    PlayerKeys {
        up: KeyCode::KeyA,
        down: KeyCode::KeyZ,
    },
    PlayerKeys {
        up: KeyCode::KeyK,
        down: KeyCode::KeyM,
    },
];

/// Tracks which keys are currently held
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            match event.state {
                ElementState::Pressed => {
                    self.held.insert(code);
                }
                ElementState::Released => {
                    self.held.remove(&code);
                }
            }
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Vertical direction for a key pair; opposing keys cancel to 0
    pub fn direction(&self, keys: PlayerKeys) -> i8 {
        let mut dir = 0;
        if self.is_held(keys.up) {
            dir -= 1;
        }
        if self.is_held(keys.down) {
            dir += 1;
        }
        dir
    }
}
