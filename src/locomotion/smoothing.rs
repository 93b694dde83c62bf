//! Locomotion domain: speed easing shared by the horizontal and vertical axes.

/// Band around the target inside which speed snaps instead of easing.
pub const SPEED_DEAD_ZONE: f32 = 0.1;

/// Eased speeds are rounded to 1 / QUANTIZE_SCALE (3 decimal places).
pub const QUANTIZE_SCALE: f32 = 1000.0;

pub fn quantize(value: f32) -> f32 {
    (value * QUANTIZE_SCALE).round() / QUANTIZE_SCALE
}

/// Ease `current` toward `target * input_magnitude`.
///
/// `factor` is `dt * change_rate` and is clamped to [0, 1], so one call never
/// moves past the goal. Outside the dead zone the result is quantized to stop
/// the lerp from creeping toward the target forever; inside it the result is
/// `target` exactly.
pub fn smooth_speed(current: f32, target: f32, input_magnitude: f32, factor: f32) -> f32 {
    if (current - target).abs() > SPEED_DEAD_ZONE {
        let goal = target * input_magnitude;
        let t = factor.clamp(0.0, 1.0);
        quantize(current + (goal - current) * t)
    } else {
        target
    }
}
