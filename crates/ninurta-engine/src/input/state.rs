use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for a single window.
///
/// Holds the set of keys that are down right now. Frame logic polls it with
/// [`InputState::key_down`] once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered to an unfocused window.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if no key is held.
    pub fn is_idle(&self) -> bool {
        self.keys_down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(events: &[InputEvent]) -> InputState {
        let mut s = InputState::default();
        for ev in events {
            s.apply_event(ev);
        }
        s
    }

    #[test]
    fn press_marks_key_down() {
        let s = state_with(&[InputEvent::pressed(Key::W)]);
        assert!(s.key_down(Key::W));
        assert!(!s.key_down(Key::S));
    }

    #[test]
    fn release_clears_key() {
        let s = state_with(&[InputEvent::pressed(Key::A), InputEvent::released(Key::A)]);
        assert!(!s.key_down(Key::A));
        assert!(s.is_idle());
    }

    #[test]
    fn repeat_press_keeps_single_entry() {
        let repeat = InputEvent::Key { key: Key::D, state: KeyState::Pressed, repeat: true };
        let s = state_with(&[InputEvent::pressed(Key::D), repeat.clone(), repeat]);
        assert_eq!(s.keys_down.len(), 1);
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let s = state_with(&[InputEvent::pressed(Key::W), InputEvent::released(Key::S)]);
        assert!(s.key_down(Key::W));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let s = state_with(&[
            InputEvent::Focused(true),
            InputEvent::pressed(Key::W),
            InputEvent::pressed(Key::Escape),
            InputEvent::Focused(false),
        ]);
        assert!(!s.focused);
        assert!(s.is_idle());
    }
}
