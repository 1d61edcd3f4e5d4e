use std::ops::Index;

use crate::device::ButtonInput;

use super::types::ButtonId;

/// Default debounce window, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Debounced state of one button.
///
/// Refreshed once per tick from the raw level. A raw change must persist for
/// the debounce window before the stable level follows it; the tick in which
/// the stable level flips reports the matching edge.
///
/// Invariant: `was_pressed()` and `was_released()` are never both true.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ButtonState {
    down: bool,
    raw_down: bool,
    raw_changed_ms: u32,
    changed_ms: u32,
    now_ms: u32,
    pressed_edge: bool,
    released_edge: bool,
}

impl ButtonState {
    /// Feeds one raw level sample taken at `now_ms`.
    pub fn update(&mut self, raw_down: bool, now_ms: u32, debounce_ms: u32) {
        self.pressed_edge = false;
        self.released_edge = false;
        self.now_ms = now_ms;

        if raw_down != self.raw_down {
            self.raw_down = raw_down;
            self.raw_changed_ms = now_ms;
        }

        if self.raw_down == self.down {
            return;
        }

        if now_ms.wrapping_sub(self.raw_changed_ms) >= debounce_ms {
            self.down = self.raw_down;
            self.changed_ms = now_ms;
            if self.down {
                self.pressed_edge = true;
            } else {
                self.released_edge = true;
            }
        }
    }

    /// Stable level: held down.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Stable level: released.
    #[inline]
    pub fn is_up(&self) -> bool {
        !self.down
    }

    /// Went down in the latest tick.
    #[inline]
    pub fn was_pressed(&self) -> bool {
        self.pressed_edge
    }

    /// Went up in the latest tick.
    #[inline]
    pub fn was_released(&self) -> bool {
        self.released_edge
    }

    /// Milliseconds the current stable level has lasted, as of the latest tick.
    #[inline]
    pub fn held_ms(&self) -> u32 {
        self.now_ms.wrapping_sub(self.changed_ms)
    }

    /// Down, and the press began at least `ms` ago.
    #[inline]
    pub fn pressed_for(&self, ms: u32) -> bool {
        self.down && self.held_ms() >= ms
    }

    /// Up, and the release began at least `ms` ago.
    #[inline]
    pub fn released_for(&self, ms: u32) -> bool {
        !self.down && self.held_ms() >= ms
    }
}

/// The device's button bank.
#[derive(Debug, Clone)]
pub struct Buttons {
    states: [ButtonState; 3],
    debounce_ms: u32,
}

impl Buttons {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            states: [ButtonState::default(); 3],
            debounce_ms,
        }
    }

    #[inline]
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    pub fn set_debounce_ms(&mut self, debounce_ms: u32) {
        self.debounce_ms = debounce_ms;
    }

    /// Reads every raw level once, in [`ButtonId::ALL`] order.
    pub fn poll<I>(&mut self, input: &mut I, now_ms: u32)
    where
        I: ButtonInput + ?Sized,
    {
        for id in ButtonId::ALL {
            let raw = input.button_level(id);
            self.states[id.index()].update(raw, now_ms, self.debounce_ms);

            if self.states[id.index()].was_pressed() {
                log::trace!("button {id} pressed");
            }
        }
    }

    #[inline]
    pub fn get(&self, id: ButtonId) -> &ButtonState {
        &self.states[id.index()]
    }

    /// True if any button went down this tick.
    pub fn any_pressed(&self) -> bool {
        self.states.iter().any(ButtonState::was_pressed)
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Index<ButtonId> for Buttons {
    type Output = ButtonState;

    fn index(&self, id: ButtonId) -> &ButtonState {
        self.get(id)
    }
}
