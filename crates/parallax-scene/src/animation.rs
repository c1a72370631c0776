//! Scroll animation registers.
//!
//! Updated once per frame, on the vertical sync edge. The very first edge
//! after reset only arms the `started` latch; the offset starts moving on
//! the second edge.

/// Scroll offset range: the offset wraps modulo this value.
pub const OFFSET_MODULUS: u16 = 400;

/// Speed register value after reset.
const RESET_SPEED: u8 = 4;

/// Scroll direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Decode the direction control bit (set = reverse).
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Reverse } else { Self::Forward }
    }

    /// The control bit that selects this direction.
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Reverse)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Animation registers: scroll offset, speed, direction, start latch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    /// Scroll offset, always < 400.
    offset: u16,
    /// Raw speed register (0-15). Zero is stored as-is.
    speed: u8,
    direction: Direction,
    /// Armed by the first frame boundary after reset.
    started: bool,
}

impl AnimationState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            speed: RESET_SPEED,
            direction: Direction::Forward,
            started: false,
        }
    }

    /// Back to the power-up values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Frame boundary update.
    ///
    /// Samples speed (low 4 bits) and direction fresh, then moves the
    /// offset by `speed` forward or `400 - speed` (one step back, modulo
    /// 400) in reverse. A speed of zero steps as if it were one; the
    /// register itself keeps the zero.
    pub fn advance(&mut self, speed: u8, direction: Direction) {
        self.speed = speed & 0x0F;
        self.direction = direction;

        if !self.started {
            self.started = true;
            return;
        }

        let step = self.effective_speed();
        let delta = match direction {
            Direction::Forward => step,
            Direction::Reverse => OFFSET_MODULUS - step,
        };
        self.offset = (self.offset + delta) % OFFSET_MODULUS;
    }

    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Raw speed register value (may be zero).
    #[must_use]
    pub const fn speed(&self) -> u8 {
        self.speed
    }

    /// Step size used for the offset update (zero clamps to one).
    #[must_use]
    pub const fn effective_speed(&self) -> u16 {
        if self.speed == 0 { 1 } else { self.speed as u16 }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// Force the offset (for testing).
    #[doc(hidden)]
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset % OFFSET_MODULUS;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> AnimationState {
        let mut anim = AnimationState::new();
        anim.advance(4, Direction::Forward);
        anim
    }

    #[test]
    fn reset_values() {
        let anim = AnimationState::new();
        assert_eq!(anim.offset(), 0);
        assert_eq!(anim.speed(), 4);
        assert_eq!(anim.direction(), Direction::Forward);
        assert!(!anim.started());
    }

    #[test]
    fn first_boundary_only_arms_latch() {
        let mut anim = AnimationState::new();
        anim.advance(3, Direction::Forward);
        assert!(anim.started());
        assert_eq!(anim.offset(), 0, "first boundary must not move the offset");
        assert_eq!(anim.speed(), 3);
    }

    #[test]
    fn forward_progression() {
        let mut anim = AnimationState::new();
        anim.advance(3, Direction::Forward);
        for n in 1..=500u16 {
            anim.advance(3, Direction::Forward);
            assert_eq!(anim.offset(), (3 * n) % 400);
        }
    }

    #[test]
    fn reverse_steps_back() {
        let mut anim = started();
        anim.advance(5, Direction::Reverse);
        assert_eq!(anim.offset(), 395);
        anim.advance(5, Direction::Reverse);
        assert_eq!(anim.offset(), 390);
        anim.advance(5, Direction::Forward);
        assert_eq!(anim.offset(), 395);
    }

    #[test]
    fn zero_speed_steps_by_one() {
        let mut anim = started();
        anim.advance(0, Direction::Forward);
        assert_eq!(anim.offset(), 1);
        assert_eq!(anim.speed(), 0, "clamp must not be stored");
        assert_eq!(anim.effective_speed(), 1);

        anim.advance(0, Direction::Reverse);
        assert_eq!(anim.offset(), 0);
    }

    #[test]
    fn speed_masked_to_four_bits() {
        let mut anim = started();
        anim.advance(0x1F, Direction::Forward);
        assert_eq!(anim.speed(), 15);
        assert_eq!(anim.offset(), 15);
    }

    #[test]
    fn offset_stays_in_range() {
        let mut anim = started();
        for i in 0..2000u16 {
            let speed = (i % 16) as u8;
            let direction = Direction::from_bit(i % 3 == 0);
            anim.advance(speed, direction);
            assert!(anim.offset() < OFFSET_MODULUS);
        }
    }

    #[test]
    fn reset_clears_latch() {
        let mut anim = started();
        anim.advance(9, Direction::Reverse);
        anim.reset();
        assert_eq!(anim, AnimationState::new());
    }

    #[test]
    fn direction_bit_round_trip() {
        assert_eq!(Direction::from_bit(false), Direction::Forward);
        assert_eq!(Direction::from_bit(true), Direction::Reverse);
        assert!(Direction::Reverse.bit());
        assert_eq!(Direction::Reverse.name(), "reverse");
    }
}
