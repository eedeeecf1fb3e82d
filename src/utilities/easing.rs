//src/utilities/easing.rs

// easing curves for the placeholder fade and the submit affordance

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingType {
    Linear,
    EaseInOut,
}

/// Eases `t`, clamped to [0, 1].
pub fn ease(easing: EasingType, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        EasingType::Linear => t,
        EasingType::EaseInOut => ease_in_out(t),
    }
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [EasingType::Linear, EasingType::EaseInOut] {
            assert_eq!(ease(easing, 0.0), 0.0);
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_clamped() {
        assert_eq!(ease(EasingType::Linear, -3.0), 0.0);
        assert_eq!(ease(EasingType::EaseInOut, 4.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((ease(EasingType::EaseInOut, 0.5) - 0.5).abs() < 1e-6);
        assert!(ease(EasingType::EaseInOut, 0.25) < 0.25);
        assert!(ease(EasingType::EaseInOut, 0.75) > 0.75);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(5.0, -15.0, 0.5), -5.0);
    }
}
