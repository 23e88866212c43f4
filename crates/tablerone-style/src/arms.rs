#![forbid(unsafe_code)]

//! Lines meeting at a border intersection.

bitflags::bitflags! {
    /// Which of the four line segments leave an intersection point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Arms: u8 {
        /// A vertical segment continues upward.
        const UP    = 0b0001;
        /// A vertical segment continues downward.
        const DOWN  = 0b0010;
        /// A horizontal segment continues to the left.
        const LEFT  = 0b0100;
        /// A horizontal segment continues to the right.
        const RIGHT = 0b1000;

        /// Both vertical arms.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// Both horizontal arms.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl Arms {
    /// Build from four flags, in up/down/left/right order.
    pub fn from_sides(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut arms = Self::empty();
        arms.set(Self::UP, up);
        arms.set(Self::DOWN, down);
        arms.set(Self::LEFT, left);
        arms.set(Self::RIGHT, right);
        arms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sides_sets_each_flag() {
        assert_eq!(Arms::from_sides(true, false, false, false), Arms::UP);
        assert_eq!(Arms::from_sides(false, true, false, false), Arms::DOWN);
        assert_eq!(Arms::from_sides(false, false, true, false), Arms::LEFT);
        assert_eq!(Arms::from_sides(false, false, false, true), Arms::RIGHT);
        assert_eq!(Arms::from_sides(true, true, true, true), Arms::all());
        assert_eq!(Arms::from_sides(false, false, false, false), Arms::empty());
    }

    #[test]
    fn composites() {
        assert_eq!(Arms::VERTICAL, Arms::UP | Arms::DOWN);
        assert_eq!(Arms::HORIZONTAL, Arms::LEFT | Arms::RIGHT);
    }
}
