// src/views/shape.rs
//
// Outline geometry for the input container.

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

const CORNER_SEGMENTS: usize = 8;

/// Polygon outline of a `w` x `h` rectangle centred on the origin with
/// corners rounded by `radius`. A radius of half the height gives a pill.
pub fn rounded_rect_points(w: f32, h: f32, radius: f32) -> Vec<Point2> {
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    let hw = w / 2.0 - r;
    let hh = h / 2.0 - r;
    // corner centres, counter-clockwise from top-right
    let corners = [
        (pt2(hw, hh), 0.0),
        (pt2(-hw, hh), FRAC_PI_2),
        (pt2(-hw, -hh), PI),
        (pt2(hw, -hh), PI + FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (centre, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            points.push(centre + vec2(angle.cos(), angle.sin()) * r);
        }
    }
    points
}
