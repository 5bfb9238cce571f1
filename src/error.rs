// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate-wide error type.
//!
//! Collaborator failures (geolocation, timezone lookup, free-text parsing)
//! surface unchanged — no fallback coordinates or zones are substituted,
//! since a silently defaulted location would corrupt every downstream
//! phase and sign computation.

use thiserror::Error;

/// Errors produced by moonwise operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Free text matched no known date/time grammar.
    #[error("unparseable timestamp: {0:?}")]
    UnparseableInput(String),

    /// Geolocation or timezone lookup failed, or returned no zone for the
    /// given coordinates.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// A zodiac/retrograde request named a body outside the fixed
    /// seven-body catalog.
    #[error("unsupported body: {0:?}")]
    UnsupportedBody(String),

    /// A lookup received a phase or sign name outside its closed enum.
    /// Signals a programming error at the caller, not bad user input.
    #[error("invalid phase name: {0:?}")]
    InvalidPhaseName(String),

    /// An instant fell outside chrono's representable range.
    #[error("timestamp out of representable range")]
    OutOfRange,

    /// Transport failure talking to the IP geolocation endpoint.
    #[error("geolocation request failed: {0}")]
    Geolocation(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
