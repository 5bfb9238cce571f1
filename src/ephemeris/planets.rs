// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geocentric planet positions from Keplerian elements.
//!
//! Mercury through Saturn use Schlyter's osculating elements (linear in
//! days from J2000 − 1.5), a solved Kepler equation, and the Jupiter/
//! Saturn mutual perturbation terms in longitude. Geocentric longitude
//! comes out good to ~0.1°, ample for sign bucketing and for the sign
//! of the daily longitude rate.

use super::{cos_d, normalize_degrees, sin_d};
use crate::body::Body;
use crate::julian::JulianDay;

/// Orbital elements: value at epoch and daily rate.
struct Elements {
    ascending_node: (f64, f64),
    inclination: (f64, f64),
    perihelion_argument: (f64, f64),
    semi_major_axis: f64,
    eccentricity: (f64, f64),
    mean_anomaly: (f64, f64),
}

const MERCURY: Elements = Elements {
    ascending_node: (48.331_3, 3.245_87e-5),
    inclination: (7.004_7, 5.00e-8),
    perihelion_argument: (29.124_1, 1.014_44e-5),
    semi_major_axis: 0.387_098,
    eccentricity: (0.205_635, 5.59e-10),
    mean_anomaly: (168.656_2, 4.092_334_436_8),
};

const VENUS: Elements = Elements {
    ascending_node: (76.679_9, 2.465_90e-5),
    inclination: (3.394_6, 2.75e-8),
    perihelion_argument: (54.891_0, 1.383_74e-5),
    semi_major_axis: 0.723_330,
    eccentricity: (0.006_773, -1.302e-9),
    mean_anomaly: (48.005_2, 1.602_130_224_4),
};

const MARS: Elements = Elements {
    ascending_node: (49.557_4, 2.110_81e-5),
    inclination: (1.849_7, -1.78e-8),
    perihelion_argument: (286.501_6, 2.929_61e-5),
    semi_major_axis: 1.523_688,
    eccentricity: (0.093_405, 2.516e-9),
    mean_anomaly: (18.602_1, 0.524_020_776_6),
};

const JUPITER: Elements = Elements {
    ascending_node: (100.454_2, 2.768_54e-5),
    inclination: (1.303_0, -1.557e-7),
    perihelion_argument: (273.877_7, 1.645_05e-5),
    semi_major_axis: 5.202_56,
    eccentricity: (0.048_498, 4.469e-9),
    mean_anomaly: (19.895_0, 0.083_085_300_1),
};

const SATURN: Elements = Elements {
    ascending_node: (113.663_4, 2.389_80e-5),
    inclination: (2.488_6, -1.081e-7),
    perihelion_argument: (339.393_9, 2.976_61e-5),
    semi_major_axis: 9.554_75,
    eccentricity: (0.055_546, -9.499e-9),
    mean_anomaly: (316.967_0, 0.033_444_228_2),
};

/// Epoch of the element tables: 2000-01-00.0 TT (JD 2 451 543.5).
const ELEMENTS_EPOCH_JD: f64 = 2_451_543.5;

#[inline]
fn at_day((value, rate): (f64, f64), d: f64) -> f64 {
    value + rate * d
}

/// Solve Kepler's equation for the eccentric anomaly, in degrees.
fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = normalize_degrees(mean_anomaly);
    let mut e = m + eccentricity.to_degrees() * sin_d(m) * (1.0 + eccentricity * cos_d(m));
    // Newton's iteration converges in a handful of steps for e < 0.21.
    for _ in 0..10 {
        let delta = (e - eccentricity.to_degrees() * sin_d(e) - m) / (1.0 - eccentricity * cos_d(e));
        e -= delta;
        if delta.abs() < 1e-9 {
            break;
        }
    }
    e
}

/// Heliocentric ecliptic rectangular coordinates (AU).
fn heliocentric(elements: &Elements, body: Body, d: f64) -> (f64, f64, f64) {
    let node = at_day(elements.ascending_node, d);
    let inclination = at_day(elements.inclination, d);
    let perihelion = at_day(elements.perihelion_argument, d);
    let eccentricity = at_day(elements.eccentricity, d);
    let mean_anomaly = at_day(elements.mean_anomaly, d);

    let ecc_anomaly = eccentric_anomaly(mean_anomaly, eccentricity);
    let x_orbital = elements.semi_major_axis * (cos_d(ecc_anomaly) - eccentricity);
    let y_orbital =
        elements.semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt() * sin_d(ecc_anomaly);

    let true_anomaly = y_orbital.atan2(x_orbital).to_degrees();
    let radius = (x_orbital * x_orbital + y_orbital * y_orbital).sqrt();
    let orbital_longitude = true_anomaly + perihelion;

    let mut x = radius
        * (cos_d(node) * cos_d(orbital_longitude)
            - sin_d(node) * sin_d(orbital_longitude) * cos_d(inclination));
    let mut y = radius
        * (sin_d(node) * cos_d(orbital_longitude)
            + cos_d(node) * sin_d(orbital_longitude) * cos_d(inclination));
    let z = radius * sin_d(orbital_longitude) * sin_d(inclination);

    let perturbation = longitude_perturbation(body, d);
    if perturbation != 0.0 {
        let longitude = y.atan2(x).to_degrees() + perturbation;
        let r_plane = (x * x + y * y).sqrt();
        x = r_plane * cos_d(longitude);
        y = r_plane * sin_d(longitude);
    }
    (x, y, z)
}

/// Great mutual perturbations of Jupiter and Saturn, in degrees of
/// heliocentric longitude.
fn longitude_perturbation(body: Body, d: f64) -> f64 {
    let mj = at_day(JUPITER.mean_anomaly, d);
    let ms = at_day(SATURN.mean_anomaly, d);
    match body {
        Body::Jupiter => {
            -0.332 * sin_d(2.0 * mj - 5.0 * ms - 67.6)
                - 0.056 * sin_d(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sin_d(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sin_d(mj - 2.0 * ms)
                + 0.022 * cos_d(mj - ms)
                + 0.023 * sin_d(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sin_d(mj - 5.0 * ms - 69.0)
        }
        Body::Saturn => {
            0.812 * sin_d(2.0 * mj - 5.0 * ms - 67.6)
                - 0.229 * cos_d(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sin_d(mj - 2.0 * ms - 3.0)
                + 0.046 * sin_d(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sin_d(mj - 3.0 * ms + 32.0)
        }
        _ => 0.0,
    }
}

/// The Sun's geocentric rectangular position (AU), same element scheme.
fn sun_geocentric(d: f64) -> (f64, f64) {
    let perihelion = 282.940_4 + 4.709_35e-5 * d;
    let eccentricity = 0.016_709 - 1.151e-9 * d;
    let mean_anomaly = 356.047_0 + 0.985_600_258_5 * d;

    let ecc_anomaly = eccentric_anomaly(mean_anomaly, eccentricity);
    let x_orbital = cos_d(ecc_anomaly) - eccentricity;
    let y_orbital = (1.0 - eccentricity * eccentricity).sqrt() * sin_d(ecc_anomaly);

    let true_anomaly = y_orbital.atan2(x_orbital).to_degrees();
    let radius = (x_orbital * x_orbital + y_orbital * y_orbital).sqrt();
    let longitude = true_anomaly + perihelion;
    (radius * cos_d(longitude), radius * sin_d(longitude))
}

/// Geocentric ecliptic (longitude, latitude) of a planet in degrees.
///
/// Callers guarantee `body` is one of the five planets; the luminaries
/// have dedicated series.
pub(crate) fn geocentric_position(body: Body, at: JulianDay) -> (f64, f64) {
    let elements = match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Sun | Body::Moon => unreachable!("luminaries use dedicated series"),
    };
    let d = at.value() - ELEMENTS_EPOCH_JD;

    let (xh, yh, zh) = heliocentric(elements, body, d);
    let (xs, ys) = sun_geocentric(d);
    let (xg, yg, zg) = (xh + xs, yh + ys, zh);

    let longitude = normalize_degrees(yg.atan2(xg).to_degrees());
    let latitude = zg.atan2((xg * xg + yg * yg).sqrt()).to_degrees();
    (longitude, latitude)
}
