//! 1-bit-per-pixel bitblt engine.
//!
//! Composes a rectangular region of a source [`Scan`] onto a destination
//! [`Scan`] under one of sixteen binary raster operations ([`Rop2`]),
//! handling sub-byte horizontal bit alignment ([`PhaseAlign`]) and clipping
//! against both source and destination bounds ([`Region1`]).
//!
//! The engine is synchronous, allocation-free, and holds no state across
//! calls. See [`blit_rop2`] and [`blit_rop2_xyhw`] for the entry points.

pub mod align;
pub mod blit;
pub mod peek;
pub mod region;
pub mod rop2;
pub mod scan;

pub use align::PhaseAlign;
pub use blit::{blit_rop2, blit_rop2_xyhw};
pub use peek::{peek16be, peek16le, peek32be, peek32le, peek8};
pub use region::Region1;
pub use rop2::Rop2;
pub use scan::Scan;

use std::error::Error as StdError;
use std::fmt;

/// Recoverable errors surfaced by the parts of the public API that accept
/// untrusted input (currently only decoding a raw ROP2 code).
///
/// The blit entry points themselves never return `Error`: per the engine's
/// contract a blit either succeeds or reports an empty result via `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A raw byte did not correspond to one of the sixteen ROP2 codes 0..=15.
    InvalidRop2Code(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRop2Code(code) => write!(f, "invalid ROP2 code: {code}"),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
