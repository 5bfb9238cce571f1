// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Device geolocation and coordinate→timezone lookup.
//!
//! Two seams, each with one shipped implementation:
//!
//! * [`Locate`] / [`IpLocator`] — "where is this machine?", answered by
//!   an ip-api style JSON endpoint over blocking HTTP.
//! * [`FindZone`] / [`TzFinder`] — "what IANA zone governs these
//!   coordinates?", answered by the embedded tzf polygon dataset.
//!
//! Failures surface as-is; nothing here substitutes a default location.

use crate::error::{Error, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Range-checked constructor: latitude ∈ [−90, 90], longitude
    /// ∈ [−180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
            return Err(Error::UnknownLocation(format!("latitude {latitude} out of range")));
        }
        if !(-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
            return Err(Error::UnknownLocation(format!("longitude {longitude} out of range")));
        }
        Ok(Self { latitude, longitude })
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Source of the device's own coordinates.
pub trait Locate {
    fn locate(&self) -> Result<GeoCoordinate>;
}

/// Maps coordinates to the IANA timezone that governs them.
pub trait FindZone {
    fn find_zone(&self, coordinate: GeoCoordinate) -> Result<Tz>;
}

const IP_API_ENDPOINT: &str = "http://ip-api.com/json/";

/// IP-based geolocation over blocking HTTP. No retries, no caching.
pub struct IpLocator {
    endpoint: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

impl IpLocator {
    pub fn new() -> Self {
        Self::with_endpoint(IP_API_ENDPOINT)
    }

    /// Point the locator at a different endpoint speaking the same JSON.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::blocking::Client::new() }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locate for IpLocator {
    fn locate(&self) -> Result<GeoCoordinate> {
        debug!(endpoint = %self.endpoint, "requesting IP geolocation");
        let response: IpApiResponse =
            self.client.get(&self.endpoint).send()?.error_for_status()?.json()?;
        if response.status != "success" {
            return Err(Error::UnknownLocation(format!(
                "geolocation endpoint answered {:?}",
                response.status
            )));
        }
        let coordinate = GeoCoordinate::new(response.lat, response.lon)?;
        debug!(lat = coordinate.latitude, lon = coordinate.longitude, "located device");
        Ok(coordinate)
    }
}

/// Coordinate→zone lookup backed by the embedded tzf dataset.
pub struct TzFinder {
    finder: tzf_rs::DefaultFinder,
}

impl TzFinder {
    /// Builds the polygon index; construct once and reuse.
    pub fn new() -> Self {
        Self { finder: tzf_rs::DefaultFinder::new() }
    }
}

impl Default for TzFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl FindZone for TzFinder {
    fn find_zone(&self, coordinate: GeoCoordinate) -> Result<Tz> {
        // tzf takes longitude first.
        let name = self.finder.get_tz_name(coordinate.longitude(), coordinate.latitude());
        if name.is_empty() {
            return Err(Error::UnknownLocation(format!(
                "no timezone at ({}, {})",
                coordinate.latitude(),
                coordinate.longitude()
            )));
        }
        debug!(zone = name, "resolved timezone from coordinates");
        name.parse::<Tz>()
            .map_err(|_| Error::UnknownLocation(format!("unrecognized zone name {name:?}")))
    }
}
