//! The sixteen binary raster operations (C4's operation table).
//!
//! Grounded on `examples/original_source/inc/blit/rop2.h` and
//! `src/blit/rop2.c`'s `rop2_func` table. The sixteen operations are
//! expressed as `Rop2` variants matched directly in [`Rop2::apply`] rather
//! than dispatched through a runtime function-pointer array
//! (`SPEC_FULL.md` §9 "Function-pointer table of ROPs"): the compiler
//! inlines the bitwise expression and eliminates the per-byte call.

use crate::{Error, Result};

/// One of the sixteen binary raster operations: a pure function of an 8-bit
/// source operand `s` and an 8-bit destination operand `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rop2 {
    /// `0x00`. Synonym: [`Rop2::BLACKNESS`].
    Zero = 0,
    /// `~(d | s)`. Synonym: [`Rop2::NOT_ERASE`].
    DSon = 1,
    /// `d & ~s`.
    DSna = 2,
    /// `~s`. Synonyms: [`Rop2::NOT_COPY`], [`Rop2::INVERT`]'s pre-release alias.
    Sn = 3,
    /// `s & ~d`. Synonym: [`Rop2::ERASE`].
    SDna = 4,
    /// `~d`. Canonical `invert` (see Open Questions in `SPEC_FULL.md` §4.3).
    Dn = 5,
    /// `d ^ s`. Synonym: [`Rop2::XOR`].
    DSx = 6,
    /// `~(d & s)`.
    DSan = 7,
    /// `d & s`. Synonym: [`Rop2::AND`].
    DSa = 8,
    /// `~(d ^ s)`.
    DSxn = 9,
    /// `d`.
    D = 10,
    /// `d | ~s`. Synonym: [`Rop2::MERGE_PAINT`].
    DSno = 11,
    /// `s`. Synonym: [`Rop2::COPY`].
    S = 12,
    /// `s | ~d`.
    SDno = 13,
    /// `d | s`. Synonym: [`Rop2::PAINT`].
    DSo = 14,
    /// `0xff`. Synonym: [`Rop2::WHITENESS`].
    One = 15,
}

impl Rop2 {
    pub const NOT_ERASE: Rop2 = Rop2::DSon;
    pub const NOT_COPY: Rop2 = Rop2::Sn;
    pub const ERASE: Rop2 = Rop2::SDna;
    pub const XOR: Rop2 = Rop2::DSx;
    pub const AND: Rop2 = Rop2::DSa;
    pub const MERGE_PAINT: Rop2 = Rop2::DSno;
    pub const COPY: Rop2 = Rop2::S;
    pub const PAINT: Rop2 = Rop2::DSo;
    pub const BLACKNESS: Rop2 = Rop2::Zero;
    pub const WHITENESS: Rop2 = Rop2::One;
    /// `Dn`, not `Sn`: this crate follows the resolution in
    /// `SPEC_FULL.md` §4.3 — "invert" means invert the destination, and the
    /// pattern test and convenience macros in the original source assume
    /// `invert` leaves the source alone.
    pub const INVERT: Rop2 = Rop2::Dn;

    /// Applies the operation to one byte of source `s` and destination `d`.
    #[inline]
    pub fn apply(self, s: u8, d: u8) -> u8 {
        match self {
            Rop2::Zero => 0x00,
            Rop2::DSon => !(d | s),
            Rop2::DSna => d & !s,
            Rop2::Sn => !s,
            Rop2::SDna => s & !d,
            Rop2::Dn => !d,
            Rop2::DSx => d ^ s,
            Rop2::DSan => !(d & s),
            Rop2::DSa => d & s,
            Rop2::DSxn => !(d ^ s),
            Rop2::D => d,
            Rop2::DSno => d | !s,
            Rop2::S => s,
            Rop2::SDno => s | !d,
            Rop2::DSo => d | s,
            Rop2::One => 0xff,
        }
    }

    /// Decodes a raw ROP2 code (0..=15) from e.g. a wire format.
    pub fn from_code(code: u8) -> Result<Rop2> {
        Ok(match code {
            0 => Rop2::Zero,
            1 => Rop2::DSon,
            2 => Rop2::DSna,
            3 => Rop2::Sn,
            4 => Rop2::SDna,
            5 => Rop2::Dn,
            6 => Rop2::DSx,
            7 => Rop2::DSan,
            8 => Rop2::DSa,
            9 => Rop2::DSxn,
            10 => Rop2::D,
            11 => Rop2::DSno,
            12 => Rop2::S,
            13 => Rop2::SDno,
            14 => Rop2::DSo,
            15 => Rop2::One,
            other => return Err(Error::InvalidRop2Code(other)),
        })
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}
