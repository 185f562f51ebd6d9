//! Offset/angle/cartesian conversions for the circular map.
//!
//! Angles are degrees in the mathematical convention: 90° is 12 o'clock and
//! growing offsets turn clockwise, i.e. towards smaller angles.

use mtsvg_render::Point;
use std::f64::consts::PI;

/// Angle of the point `offset` along a circle of `radius`, measured on the
/// circumference from 12 o'clock. Result is in `[0, 360)`.
pub fn offset_to_angle(offset: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 90.0;
    }
    let mut angle = 90.0 - (offset / radius) * (180.0 / PI);
    // Past half the circumference the raw value drops below -90°.
    if angle < -90.0 {
        angle += 360.0;
    }
    let angle = angle.rem_euclid(360.0);
    if 360.0 - angle < 1e-9 { 0.0 } else { angle }
}

/// Point at `angle` on a circle of `radius` around the origin, y down.
pub fn polar_to_cartesian(angle: f64, radius: f64) -> Point {
    let t = angle.to_radians();
    Point::new(radius * t.cos(), -radius * t.sin())
}

/// Unit-circle point scaled by `ratio × radius`.
pub fn scaled_polar(angle: f64, radius: f64, ratio: f64) -> Point {
    polar_to_cartesian(angle, radius * ratio)
}

/// Degrees spanned by an arc of `length` on a circle of `radius`.
pub fn arc_degrees(length: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        0.0
    } else {
        (length / radius).to_degrees()
    }
}

pub fn radius_for_circumference(circumference: f64) -> f64 {
    circumference / (2.0 * PI)
}

/// Text rotation (clockwise, screen) that lays a label along the circle at
/// `angle`, flipped on the lower half so it never reads upside down.
pub fn tangential_rotation(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    if angle > 180.0 && angle < 360.0 {
        270.0 - angle
    } else {
        90.0 - angle
    }
}

/// Text rotation that points a label along the radius at `angle`, flipped
/// on the left half.
pub fn radial_rotation(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    if angle > 90.0 && angle < 270.0 {
        180.0 - angle
    } else {
        (360.0 - angle).rem_euclid(360.0)
    }
}
