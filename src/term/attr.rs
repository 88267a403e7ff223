//! Cell attributes: a 16-bit color/intensity flag set.
//!
//! The bit layout follows the classic console convention (blue, green,
//! red, intensity for the foreground; the same shifted by four for the
//! background) and must not change: art tables and tests encode against
//! it. Derived colors are OR-combinations of the base bits.

use bitflags::bitflags;

bitflags! {
    /// Per-cell display attribute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u16 {
        const FG_BLUE    = 1 << 0;
        const FG_GREEN   = 1 << 1;
        const FG_RED     = 1 << 2;
        const FG_INTENSE = 1 << 3;
        const BG_BLUE    = 1 << 4;
        const BG_GREEN   = 1 << 5;
        const BG_RED     = 1 << 6;
        const BG_INTENSE = 1 << 7;

        // Derived foreground colors.
        const FG_MAGENTA = Self::FG_RED.bits() | Self::FG_BLUE.bits();
        const FG_YELLOW  = Self::FG_RED.bits() | Self::FG_GREEN.bits();
        const FG_CYAN    = Self::FG_BLUE.bits() | Self::FG_GREEN.bits();
        const FG_GREY    = Self::FG_RED.bits() | Self::FG_GREEN.bits() | Self::FG_BLUE.bits();
        const FG_WHITE   = Self::FG_GREY.bits() | Self::FG_INTENSE.bits();

        // Derived background colors.
        const BG_MAGENTA = Self::BG_RED.bits() | Self::BG_BLUE.bits();
        const BG_YELLOW  = Self::BG_RED.bits() | Self::BG_GREEN.bits();
        const BG_CYAN    = Self::BG_BLUE.bits() | Self::BG_GREEN.bits();
        const BG_GREY    = Self::BG_RED.bits() | Self::BG_GREEN.bits() | Self::BG_BLUE.bits();
        const BG_WHITE   = Self::BG_GREY.bits() | Self::BG_INTENSE.bits();
    }
}

impl Attr {
    /// Grey-on-black, the attribute a cleared buffer holds.
    pub const DEFAULT: Attr = Attr::FG_GREY;

    /// Black foreground/background carry no bits at all.
    pub const FG_BLACK: Attr = Attr::empty();
    pub const BG_BLACK: Attr = Attr::empty();

    /// The foreground half of the attribute (color + intensity bits).
    pub fn foreground(self) -> Attr {
        self & (Attr::FG_GREY | Attr::FG_INTENSE)
    }

    /// The background half of the attribute.
    pub fn background(self) -> Attr {
        self & (Attr::BG_GREY | Attr::BG_INTENSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_colors_are_the_documented_or_combinations() {
        assert_eq!(Attr::FG_WHITE, Attr::FG_RED | Attr::FG_GREEN | Attr::FG_BLUE | Attr::FG_INTENSE);
        assert_eq!(Attr::FG_GREY, Attr::FG_RED | Attr::FG_GREEN | Attr::FG_BLUE);
        assert_eq!(Attr::FG_YELLOW, Attr::FG_RED | Attr::FG_GREEN);
        assert_eq!(Attr::FG_CYAN, Attr::FG_BLUE | Attr::FG_GREEN);
        assert_eq!(Attr::FG_MAGENTA, Attr::FG_RED | Attr::FG_BLUE);
    }

    #[test]
    fn bit_layout_is_fixed() {
        assert_eq!(Attr::FG_BLUE.bits(), 0x0001);
        assert_eq!(Attr::FG_GREEN.bits(), 0x0002);
        assert_eq!(Attr::FG_RED.bits(), 0x0004);
        assert_eq!(Attr::FG_INTENSE.bits(), 0x0008);
        assert_eq!(Attr::BG_BLUE.bits(), 0x0010);
        assert_eq!(Attr::BG_GREEN.bits(), 0x0020);
        assert_eq!(Attr::BG_RED.bits(), 0x0040);
        assert_eq!(Attr::BG_INTENSE.bits(), 0x0080);
    }

    #[test]
    fn halves_split_cleanly() {
        let a = Attr::FG_YELLOW | Attr::FG_INTENSE | Attr::BG_BLUE;
        assert_eq!(a.foreground(), Attr::FG_YELLOW | Attr::FG_INTENSE);
        assert_eq!(a.background(), Attr::BG_BLUE);
    }
}
