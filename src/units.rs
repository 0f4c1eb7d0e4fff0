/*
    sta_core

    Copyright 2024-2026 The sta_core Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    units.rs

    SI value types, rise/fall and min/max axes, and the library's unit
    multiplier table (SPEC_FULL §4.D.1, §6).

*/

#![allow(dead_code)]

use std::fmt;
use strum_macros::{EnumCount, EnumIter};

/// Delay and arrival values are stored in seconds internally; POCV moments
/// are out of scope for this core (SPEC_FULL §3).
pub type Delay = f64;
pub type Slew = f64;
pub type Arrival = f64;
pub type Required = f64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum RiseFall {
    Rise,
    Fall,
}

impl RiseFall {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RiseFall::Rise => 0,
            RiseFall::Fall => 1,
        }
    }

    #[inline]
    pub fn opposite(self) -> RiseFall {
        match self {
            RiseFall::Rise => RiseFall::Fall,
            RiseFall::Fall => RiseFall::Rise,
        }
    }
}

impl fmt::Display for RiseFall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiseFall::Rise => "rise",
            RiseFall::Fall => "fall",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum MinMax {
    Min,
    Max,
}

impl MinMax {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            MinMax::Min => 0,
            MinMax::Max => 1,
        }
    }
}

/// Alias used where the spec distinguishes "early"/"late" rather than
/// "min"/"max" (delay/slew sigma tables) — the axis shape is identical.
pub type EarlyLate = MinMax;

/// One multiplier per unit kind named in SPEC_FULL §6. Everything the
/// liberty model stores (capacitances, resistances, delays, voltages,
/// currents, powers, distances) goes through these so a consumer never has
/// to re-derive a scale factor from a raw attribute string.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    pub time: f64,
    pub capacitance: f64,
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
    pub distance: f64,
}

impl Default for Units {
    fn default() -> Self {
        // Liberty's implicit defaults: 1ns, 1pF, 1V, 1mA, 1kOhm, 1nW, 1um.
        Units {
            time: 1.0e-9,
            capacitance: 1.0e-12,
            voltage: 1.0,
            current: 1.0e-3,
            resistance: 1.0e3,
            power: 1.0e-9,
            distance: 1.0e-6,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitParseError {
    #[error("empty unit string")]
    Empty,
    #[error("unrecognized unit suffix in '{0:?}'")]
    UnknownSuffix(char),
}

/// Parses a `<mult><scale><unit>` literal (SPEC_FULL §6), e.g. `"1ns"`,
/// `"10pF"`, `"100mV"`, into its numeric SI multiplier. `mult` is an optional
/// leading `1`/`10`/`100`; `scale` is an optional single-character prefix
/// drawn from `{k, m, u/μ, n, p, f}`; the remainder is the unit name and is
/// not otherwise validated (unknown unit names are accepted — parsing the
/// unit *grammar* is in scope, validating unit *names* is a front-end
/// concern per §1).
pub fn parse_unit_scale(s: &str) -> Result<f64, UnitParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(UnitParseError::Empty);
    }
    let mut chars = s.chars().peekable();
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }
    let mult: f64 = if digits.is_empty() { 1.0 } else { digits.parse().unwrap_or(1.0) };

    let remainder: String = chars.collect();
    let mut remainder_chars = remainder.chars();
    let scale = match remainder_chars.clone().next() {
        Some('k') | Some('K') => Some(1.0e3),
        Some('m') => Some(1.0e-3),
        Some('u') | Some('\u{03bc}') => Some(1.0e-6),
        Some('n') => Some(1.0e-9),
        Some('p') => Some(1.0e-12),
        Some('f') => Some(1.0e-15),
        _ => None,
    };

    let scale_mult = match scale {
        // A scale prefix only applies when at least one unit character
        // remains after consuming it (otherwise "m" alone is the unit
        // "meters"/milli-distance, not a bare scale with no unit).
        Some(mult) if remainder.chars().count() > 1 => {
            remainder_chars.next();
            mult
        }
        _ => 1.0,
    };
    let unit_name: String = remainder_chars.collect::<String>();
    let unit_name = if scale_mult != 1.0 || scale.is_none() { unit_name } else { remainder.clone() };
    let _ = unit_name; // unit identity is a front-end concern; only the scale matters here.

    Ok(mult * scale_mult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rise_fall_opposite() {
        assert_eq!(RiseFall::Rise.opposite(), RiseFall::Fall);
        assert_eq!(RiseFall::Fall.opposite(), RiseFall::Rise);
    }

    #[test]
    fn parses_plain_unit() {
        assert_eq!(parse_unit_scale("1ns").unwrap(), 1.0e-9);
        assert_eq!(parse_unit_scale("10pF").unwrap(), 10.0 * 1.0e-12);
        assert_eq!(parse_unit_scale("100mV").unwrap(), 100.0 * 1.0e-3);
    }

    #[test]
    fn no_scale_prefix_is_unity() {
        assert_eq!(parse_unit_scale("1V").unwrap(), 1.0);
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(parse_unit_scale(""), Err(UnitParseError::Empty));
    }
}
