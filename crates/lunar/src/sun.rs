//! Apparent solar longitude, quantized to twelve 30-degree sectors.

use std::f64::consts::PI;

/// Returns the 30-degree sector (0..=11) occupied by the sun at local
/// midnight of the given Julian day number.
///
/// Computes the sun's mean anomaly and mean longitude as polynomials in
/// Julian centuries since J2000, applies a three-term equation-of-center
/// correction, and divides the normalized true longitude by 30 degrees.
/// Sector 0 starts at the March equinox; sector 9 starts at the December
/// solstice, which is what anchors month 11 of the lunar year (see
/// [`lunar_month11`](crate::lunar_month11)).
///
/// The full `f64` series is evaluated in a fixed order; dates close to a
/// sector transition are sensitive to the last few bits of the result.
pub fn sun_longitude_sector(jdn: i64, timezone: f64) -> i64 {
    // Julian centuries from J2000, at local midnight.
    let t = (jdn as f64 - 2451545.5 - timezone / 24.0) / 36525.0;
    let t2 = t * t;
    let dr = PI / 180.0;

    // Mean anomaly and mean longitude of the sun, in degrees.
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;

    // Equation of center.
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (dr * m).sin();
    dl = dl + (0.019993 - 0.000101 * t) * (dr * 2.0 * m).sin() + 0.000290 * (dr * 3.0 * m).sin();

    // True longitude, normalized into [0, 2*pi).
    let mut l = (l0 + dl) * dr;
    l = l - PI * 2.0 * (l / (PI * 2.0)).floor();

    (l / PI * 6.0).floor() as i64
}
