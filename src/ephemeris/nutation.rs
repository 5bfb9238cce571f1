// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Obliquity, nutation, and the ecliptic↔equatorial transforms.
//!
//! Mean obliquity follows Meeus eq. (22.2); nutation uses the four
//! dominant terms of the 1980 IAU theory (Meeus ch. 22, accurate to
//! ~0.5″), which is far below the precision the sign computations need.

use super::{cos_d, normalize_degrees, sin_d};

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries
/// from J2000.0.
pub(crate) fn mean_obliquity(t: f64) -> f64 {
    // 23°26′21.448″ − 46.8150″t − 0.00059″t² + 0.001813″t³
    23.0 + 26.0 / 60.0
        + (21.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t) / 3600.0
}

/// Nutation in longitude and obliquity (Δψ, Δε) in degrees.
pub(crate) fn nutation(t: f64) -> (f64, f64) {
    let omega = 125.044_52 - 1934.136_261 * t;
    let l_sun = 280.466_5 + 36_000.769_8 * t;
    let l_moon = 218.316_5 + 481_267.881_3 * t;

    let dpsi = (-17.20 * sin_d(omega) - 1.32 * sin_d(2.0 * l_sun)
        - 0.23 * sin_d(2.0 * l_moon)
        + 0.21 * sin_d(2.0 * omega))
        / 3600.0;
    let deps = (9.20 * cos_d(omega) + 0.57 * cos_d(2.0 * l_sun) + 0.10 * cos_d(2.0 * l_moon)
        - 0.09 * cos_d(2.0 * omega))
        / 3600.0;
    (dpsi, deps)
}

/// True obliquity ε = ε₀ + Δε in degrees.
pub(crate) fn true_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + nutation(t).1
}

/// Ecliptic (λ, β) → equatorial (α, δ), all in degrees.
pub(crate) fn ecliptic_to_equatorial(
    longitude: f64,
    latitude: f64,
    obliquity: f64,
) -> (f64, f64) {
    let (sin_lon, cos_lon) = (sin_d(longitude), cos_d(longitude));
    let (sin_lat, cos_lat) = (sin_d(latitude), cos_d(latitude));
    let (sin_eps, cos_eps) = (sin_d(obliquity), cos_d(obliquity));

    let right_ascension = (sin_lon * cos_eps - latitude.to_radians().tan() * sin_eps)
        .atan2(cos_lon)
        .to_degrees();
    let declination = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).asin().to_degrees();
    (normalize_degrees(right_ascension), declination)
}

/// Equatorial (α, δ) → ecliptic longitude λ in degrees.
///
/// The full inverse transform, not the α-as-λ shortcut: near the
/// solstitial colures the Moon's latitude pushes α up to 5° away from
/// λ, enough to misplace a sign boundary.
pub(crate) fn equatorial_to_ecliptic_longitude(
    right_ascension: f64,
    declination: f64,
    obliquity: f64,
) -> f64 {
    let (sin_ra, cos_ra) = (sin_d(right_ascension), cos_d(right_ascension));
    let (sin_eps, cos_eps) = (sin_d(obliquity), cos_d(obliquity));

    let longitude = (sin_ra * cos_eps + declination.to_radians().tan() * sin_eps)
        .atan2(cos_ra)
        .to_degrees();
    normalize_degrees(longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_obliquity_at_j2000() {
        assert!((mean_obliquity(0.0) - 23.439_291).abs() < 1e-5);
    }

    #[test]
    fn nutation_magnitudes_are_bounded() {
        // |Δψ| ≤ ~17.3″, |Δε| ≤ ~9.4″ over any epoch.
        for i in -10..=10 {
            let (dpsi, deps) = nutation(i as f64 / 10.0);
            assert!(dpsi.abs() < 20.0 / 3600.0);
            assert!(deps.abs() < 10.5 / 3600.0);
        }
    }

    #[test]
    fn transform_roundtrip_preserves_longitude() {
        let eps = mean_obliquity(0.0);
        for &(lon, lat) in &[(0.0, 0.0), (89.9, 5.1), (180.0, -4.8), (271.3, 2.2), (359.5, -5.0)] {
            let (ra, dec) = ecliptic_to_equatorial(lon, lat, eps);
            let back = equatorial_to_ecliptic_longitude(ra, dec, eps);
            assert!((back - lon).abs() < 1e-9, "λ={lon} → {back}");
        }
    }

    #[test]
    fn zero_latitude_keeps_declination_on_ecliptic() {
        let eps = mean_obliquity(0.0);
        let (_, dec) = ecliptic_to_equatorial(90.0, 0.0, eps);
        // At λ=90° the ecliptic reaches its maximum declination ε.
        assert!((dec - eps).abs() < 1e-9);
    }
}
