//! Transverse Mercator on the WGS84 ellipsoid.
//!
//! Krüger series in the third flattening `n`, carried to order n⁶. The
//! forward direction converts geodetic to conformal latitude in closed form;
//! the inverse uses the series for conformal to geodetic latitude, so neither
//! direction iterates.
//!
//! References:
//! - C. F. F. Karney, "Transverse Mercator with an accuracy of a few
//!   nanometers", J. Geodesy 85 (2011).
//! - L. Krüger, "Konforme Abbildung des Erdellipsoids in der Ebene" (1912).

use super::Hemisphere;

/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 flattening
#[allow(clippy::unreadable_literal)]
pub const WGS84_F: f64 = 1.0 / 298.257223563;

/// UTM central scale factor
pub const UTM_K0: f64 = 0.9996;

/// False easting applied in every zone
pub const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied in the southern hemisphere
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

// Third flattening and its powers
const N: f64 = WGS84_F / (2.0 - WGS84_F);
const N2: f64 = N * N;
const N3: f64 = N2 * N;
const N4: f64 = N3 * N;
const N5: f64 = N4 * N;
const N6: f64 = N5 * N;

/// Rectifying radius
const RECTIFYING_RADIUS: f64 = WGS84_A / (1.0 + N) * (1.0 + N2 / 4.0 + N4 / 64.0 + N6 / 256.0);

const ALPHA: [f64; 6] = [
    N / 2.0 - 2.0 / 3.0 * N2 + 5.0 / 16.0 * N3 + 41.0 / 180.0 * N4 - 127.0 / 288.0 * N5
        + 7891.0 / 37800.0 * N6,
    13.0 / 48.0 * N2 - 3.0 / 5.0 * N3 + 557.0 / 1440.0 * N4 + 281.0 / 630.0 * N5
        - 1983433.0 / 1935360.0 * N6,
    61.0 / 240.0 * N3 - 103.0 / 140.0 * N4 + 15061.0 / 26880.0 * N5
        + 167603.0 / 181440.0 * N6,
    49561.0 / 161280.0 * N4 - 179.0 / 168.0 * N5 + 6601661.0 / 7257600.0 * N6,
    34729.0 / 80640.0 * N5 - 3418889.0 / 1995840.0 * N6,
    212378941.0 / 319334400.0 * N6,
];

const BETA: [f64; 6] = [
    N / 2.0 - 2.0 / 3.0 * N2 + 37.0 / 96.0 * N3 - 1.0 / 360.0 * N4 - 81.0 / 512.0 * N5
        + 96199.0 / 604800.0 * N6,
    1.0 / 48.0 * N2 + 1.0 / 15.0 * N3 - 437.0 / 1440.0 * N4 + 46.0 / 105.0 * N5
        - 1118711.0 / 3870720.0 * N6,
    17.0 / 480.0 * N3 - 37.0 / 840.0 * N4 - 209.0 / 4480.0 * N5 + 5569.0 / 90720.0 * N6,
    4397.0 / 161280.0 * N4 - 11.0 / 504.0 * N5 - 830251.0 / 7257600.0 * N6,
    4583.0 / 161280.0 * N5 - 108847.0 / 3991680.0 * N6,
    20648693.0 / 638668800.0 * N6,
];

// Conformal to geodetic latitude
const DELTA: [f64; 6] = [
    2.0 * N - 2.0 / 3.0 * N2 - 2.0 * N3 + 116.0 / 45.0 * N4 + 26.0 / 45.0 * N5
        - 2854.0 / 675.0 * N6,
    7.0 / 3.0 * N2 - 8.0 / 5.0 * N3 - 227.0 / 45.0 * N4 + 2704.0 / 315.0 * N5
        + 2323.0 / 945.0 * N6,
    56.0 / 15.0 * N3 - 136.0 / 35.0 * N4 - 1262.0 / 105.0 * N5 + 73814.0 / 2835.0 * N6,
    4279.0 / 630.0 * N4 - 332.0 / 35.0 * N5 - 399572.0 / 14175.0 * N6,
    4174.0 / 315.0 * N5 - 144838.0 / 6237.0 * N6,
    601676.0 / 22275.0 * N6,
];

fn false_northing(hemisphere: Hemisphere) -> f64 {
    match hemisphere {
        Hemisphere::North => 0.0,
        Hemisphere::South => FALSE_NORTHING_SOUTH,
    }
}

/// Projects a geodetic position (degrees) onto the grid of a central
/// meridian, returning `(easting, northing)` in meters.
pub fn forward(
    longitude: f64,
    latitude: f64,
    central_meridian: f64,
    hemisphere: Hemisphere,
) -> (f64, f64) {
    let eccentricity = (WGS84_F * (2.0 - WGS84_F)).sqrt();
    let phi = latitude.to_radians();
    let lambda = (longitude - central_meridian).to_radians();

    let tau = phi.tan();
    let sigma = (eccentricity * (eccentricity * tau / (1.0 + tau * tau).sqrt()).atanh()).sinh();
    let tau_prime = tau * (1.0 + sigma * sigma).sqrt() - sigma * (1.0 + tau * tau).sqrt();

    let (sin_lambda, cos_lambda) = lambda.sin_cos();
    let xi_prime = tau_prime.atan2(cos_lambda);
    let eta_prime = (sin_lambda / (tau_prime * tau_prime + cos_lambda * cos_lambda).sqrt()).asinh();

    let mut xi = xi_prime;
    let mut eta = eta_prime;
    for (j, alpha) in ALPHA.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
        eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
    }

    let easting = UTM_K0 * RECTIFYING_RADIUS * eta + FALSE_EASTING;
    let northing = UTM_K0 * RECTIFYING_RADIUS * xi + false_northing(hemisphere);
    (easting, northing)
}

/// Inverse of [`forward`]: grid meters back to `(longitude, latitude)` degrees.
///
/// The longitude is not wrapped, so eastings far outside the zone give
/// longitudes beyond the zone edges.
pub fn inverse(
    easting: f64,
    northing: f64,
    central_meridian: f64,
    hemisphere: Hemisphere,
) -> (f64, f64) {
    let eta = (easting - FALSE_EASTING) / (UTM_K0 * RECTIFYING_RADIUS);
    let xi = (northing - false_northing(hemisphere)) / (UTM_K0 * RECTIFYING_RADIUS);

    let mut xi_prime = xi;
    let mut eta_prime = eta;
    for (j, beta) in BETA.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi_prime -= beta * (k * xi).sin() * (k * eta).cosh();
        eta_prime -= beta * (k * xi).cos() * (k * eta).sinh();
    }

    let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
    let lambda = eta_prime.sinh().atan2(xi_prime.cos());

    let mut phi = chi;
    for (j, delta) in DELTA.iter().enumerate() {
        phi += delta * (2.0 * (j + 1) as f64 * chi).sin();
    }

    (central_meridian + lambda.to_degrees(), phi.to_degrees())
}
