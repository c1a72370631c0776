//! Control input for the demo.
//!
//! Two layers:
//! 1. `ControlWord`: the 8-bit input port, sampled at each frame boundary.
//! 2. `ControlQueue`: frame-stamped control word changes for scripted runs.

use std::collections::VecDeque;

use parallax_scene::Direction;

/// Speed field, bits 3-0.
const SPEED_MASK: u8 = 0x0F;
/// Direction flag, bit 4 (set = reverse).
const DIRECTION_BIT: u8 = 0x10;

/// The 8-bit control input. Bits 7-5 are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlWord(pub u8);

impl ControlWord {
    /// Build a control word; `speed` is truncated to 4 bits.
    #[must_use]
    pub const fn new(speed: u8, direction: Direction) -> Self {
        let dir = if direction.bit() { DIRECTION_BIT } else { 0 };
        Self((speed & SPEED_MASK) | dir)
    }

    /// Speed register value, 0-15.
    #[must_use]
    pub const fn speed(self) -> u8 {
        self.0 & SPEED_MASK
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        Direction::from_bit(self.0 & DIRECTION_BIT != 0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl Default for ControlWord {
    /// Speed 4 forward, matching the animation's reset state.
    fn default() -> Self {
        Self::new(4, Direction::Forward)
    }
}

impl From<u8> for ControlWord {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// A control word change scheduled for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    /// Frame number at which the word is applied.
    pub frame: u64,
    pub word: ControlWord,
}

/// Frame-stamped control changes, kept sorted by frame.
///
/// Events sharing a frame apply in insertion order, so the last one wins.
#[derive(Debug, Clone, Default)]
pub struct ControlQueue {
    events: VecDeque<ControlEvent>,
}

impl ControlQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a change.
    pub fn push(&mut self, event: ControlEvent) {
        let pos = self
            .events
            .iter()
            .position(|e| e.frame > event.frame)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event);
    }

    /// Enqueue `word` for `frame`.
    pub fn schedule(&mut self, frame: u64, word: ControlWord) {
        self.push(ControlEvent { frame, word });
    }

    /// Drain every event due at or before `frame`. Returns the word that
    /// should be on the input port afterwards, if any event fired.
    pub fn process(&mut self, frame: u64) -> Option<ControlWord> {
        let mut latest = None;
        while self.events.front().is_some_and(|e| e.frame <= frame) {
            latest = self.events.pop_front().map(|e| e.word);
        }
        latest
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_fields() {
        let word = ControlWord::from(0b1111_0011);
        assert_eq!(word.speed(), 3);
        assert_eq!(word.direction(), Direction::Reverse);

        let word = ControlWord::from(0b1110_1111);
        assert_eq!(word.speed(), 15);
        assert_eq!(word.direction(), Direction::Forward);
    }

    #[test]
    fn word_from_parts() {
        assert_eq!(ControlWord::new(5, Direction::Reverse).bits(), 0x15);
        assert_eq!(ControlWord::new(0x13, Direction::Forward).bits(), 0x03);
        assert_eq!(ControlWord::default().bits(), 0x04);
    }

    #[test]
    fn queue_orders_by_frame() {
        let mut queue = ControlQueue::new();
        queue.schedule(20, ControlWord(2));
        queue.schedule(5, ControlWord(1));
        queue.schedule(20, ControlWord(3));
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.process(4), None);
        assert_eq!(queue.process(5), Some(ControlWord(1)));
        assert_eq!(queue.process(19), None);
        // Same-frame events: the later insertion wins
        assert_eq!(queue.process(20), Some(ControlWord(3)));
        assert!(queue.is_empty());
    }

    #[test]
    fn overdue_events_fire_at_once() {
        let mut queue = ControlQueue::new();
        queue.schedule(1, ControlWord(7));
        queue.schedule(2, ControlWord(8));
        assert_eq!(queue.process(100), Some(ControlWord(8)));
        assert!(queue.is_empty());
    }
}
