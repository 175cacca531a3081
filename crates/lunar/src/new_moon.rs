//! New-moon instant from a lunation index.

use std::f64::consts::PI;

/// Mean length of a synodic month in days, used to estimate lunation
/// indices from day numbers.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian day of the lunation-zero reference new moon (January 1900),
/// with its fractional time of day.
pub(crate) const LUNATION_EPOCH_JD: f64 = 2415021.076998695;

/// Same epoch truncated to a whole Julian day number.
pub(crate) const LUNATION_EPOCH_JDN: i64 = 2415021;

/// Returns the Julian day number of the `k`-th new moon after the
/// January 1900 reference, in the caller's timezone.
///
/// The instant is a truncated periodic series: a mean-new-moon
/// polynomial in `k`, refined by fourteen sine terms in the sun's mean
/// anomaly `M`, the moon's mean anomaly `M'`, and the moon's argument of
/// latitude `F`, then shifted by a ΔT correction with separate
/// polynomial branches for dates before ~800 AD (`T < -11` centuries)
/// and after. The corrected instant is rounded to the local civil day.
///
/// The coefficients are fixed constants of the approximation and are
/// reproduced to full double precision; the series is evaluated in a
/// fixed term order so results are bit-stable. Strictly monotone in `k`.
///
/// # Example
///
/// ```
/// use amlich_lunar::new_moon_day;
///
/// // Lunation 1236: the new moon of December 8, 1999 (UTC+7).
/// assert_eq!(new_moon_day(1236, 7.0), 2451521);
/// ```
pub fn new_moon_day(k: i64, timezone: f64) -> i64 {
    let kf = k as f64;
    // Time in Julian centuries from 1900 January 0.5.
    let t = kf / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    // Mean new moon.
    let mut jd1 = 2415020.75933 + 29.53058868 * kf + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 = jd1 + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * dr).sin();

    // Sun's mean anomaly.
    let m = 359.2242 + 29.10535608 * kf - 0.0000333 * t2 - 0.00000347 * t3;
    // Moon's mean anomaly.
    let mpr = 306.0253 + 385.81691806 * kf + 0.0107306 * t2 + 0.00001236 * t3;
    // Moon's argument of latitude.
    let f = 21.2964 + 390.67050646 * kf - 0.0016528 * t2 - 0.00000239 * t3;

    // Periodic corrections to the mean phase instant.
    let mut c1 = (0.1734 - 0.000393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 = c1 - 0.4068 * (mpr * dr).sin() + 0.0161 * (dr * 2.0 * mpr).sin();
    c1 = c1 - 0.0004 * (dr * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (dr * 2.0 * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();

    // ΔT: historical tidal-deceleration model before ~800 AD, the
    // modern fit after.
    let deltat = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };

    let jd_new = jd1 + c1 - deltat;
    (jd_new + 0.5 + timezone / 24.0).floor() as i64
}
