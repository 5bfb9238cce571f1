// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The fixed catalog of bodies the crate reports on.
//!
//! | Body | Zodiac sign | Retrograde |
//! |------|-------------|------------|
//! | Sun, Moon | ✓ | never (always direct) |
//! | Mercury … Saturn | ✓ | ✓ |
//!
//! Only the seven classical naked-eye bodies are supported; requests for
//! anything else fail with [`Error::UnsupportedBody`].

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A classical naked-eye body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// The five planets of the status report, in report order.
    pub const VISIBLE_PLANETS: [Body; 5] =
        [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn];

    pub const fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }

    /// Graphical emoji used in status reports.
    pub const fn emoji(&self) -> &'static str {
        match self {
            Body::Sun => "🌞",
            Body::Moon => "🌝",
            Body::Mercury => "🐦‍⬛",
            Body::Venus => "💖",
            Body::Mars => "🗡️",
            Body::Jupiter => "⚡️",
            Body::Saturn => "⏳",
        }
    }

    /// Classical astronomical symbol; the luminaries have none in this set.
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Body::Sun | Body::Moon => None,
            Body::Mercury => Some("☿️"),
            Body::Venus => Some("♀️"),
            Body::Mars => Some("♂️"),
            Body::Jupiter => Some("♃"),
            Body::Saturn => Some("♄"),
        }
    }

    /// Whether the body can ever show apparent retrograde motion.
    #[inline]
    pub const fn can_retrograde(&self) -> bool {
        !matches!(self, Body::Sun | Body::Moon)
    }
}

impl FromStr for Body {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "moon" => Ok(Body::Moon),
            "mercury" => Ok(Body::Mercury),
            "venus" => Ok(Body::Venus),
            "mars" => Ok(Body::Mars),
            "jupiter" => Ok(Body::Jupiter),
            "saturn" => Ok(Body::Saturn),
            other => Err(Error::UnsupportedBody(other.to_owned())),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Mercury".parse::<Body>().unwrap(), Body::Mercury);
        assert_eq!("SATURN".parse::<Body>().unwrap(), Body::Saturn);
    }

    #[test]
    fn parse_rejects_outer_planets() {
        assert!(matches!(
            "Uranus".parse::<Body>(),
            Err(Error::UnsupportedBody(name)) if name == "uranus"
        ));
    }

    #[test]
    fn symbols_exist_for_planets_only() {
        assert!(Body::Sun.symbol().is_none());
        assert!(Body::Moon.symbol().is_none());
        assert_eq!(Body::Saturn.symbol(), Some("♄"));
        assert!(Body::VISIBLE_PLANETS.iter().all(|p| p.symbol().is_some()));
    }

    #[test]
    fn luminaries_never_retrograde() {
        assert!(!Body::Sun.can_retrograde());
        assert!(!Body::Moon.can_retrograde());
        assert!(Body::VISIBLE_PLANETS.iter().all(Body::can_retrograde));
    }
}
