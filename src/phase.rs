// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The eight-phase lunar cycle.
//!
//! Four *principal* phases (instants computed by the ephemeris) alternate
//! with four *intermediate* phases (the stretches between them):
//!
//! New → Waxing Crescent → First Quarter → Waxing Gibbous → Full
//! → Waning Gibbous → Last Quarter → Waning Crescent → New …

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the eight named phases of the Moon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl Phase {
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::New => "New",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase emoji; `use_faces` swaps the New and Full disks for the
    /// face variants.
    pub const fn emoji(&self, use_faces: bool) -> &'static str {
        match self {
            Phase::New => {
                if use_faces {
                    "🌚"
                } else {
                    "🌑"
                }
            }
            Phase::WaxingCrescent => "🌒",
            Phase::FirstQuarter => "🌓",
            Phase::WaxingGibbous => "🌔",
            Phase::Full => {
                if use_faces {
                    "🌝"
                } else {
                    "🌕"
                }
            }
            Phase::WaningGibbous => "🌖",
            Phase::LastQuarter => "🌗",
            Phase::WaningCrescent => "🌘",
        }
    }

    /// A principal phase has an exact instant; an intermediate phase is
    /// the span between two principals.
    #[inline]
    pub const fn is_principal(&self) -> bool {
        matches!(
            self,
            Phase::New | Phase::FirstQuarter | Phase::Full | Phase::LastQuarter
        )
    }

    /// Whether the illuminated fraction is growing.
    #[inline]
    pub const fn is_waxing(&self) -> bool {
        matches!(
            self,
            Phase::New | Phase::WaxingCrescent | Phase::FirstQuarter | Phase::WaxingGibbous
        )
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Phase::New),
            "Waxing Crescent" => Ok(Phase::WaxingCrescent),
            "First Quarter" => Ok(Phase::FirstQuarter),
            "Waxing Gibbous" => Ok(Phase::WaxingGibbous),
            "Full" => Ok(Phase::Full),
            "Waning Gibbous" => Ok(Phase::WaningGibbous),
            "Last Quarter" => Ok(Phase::LastQuarter),
            "Waning Crescent" => Ok(Phase::WaningCrescent),
            other => Err(Error::InvalidPhaseName(other.to_owned())),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
