use crate::foundation::core::Tick;

/// Fraction of the way `tick` lies through `[start, end]`. Callers guarantee `start < end`.
pub(crate) fn progress(start: Tick, end: Tick, tick: Tick) -> f64 {
    (tick - start) as f64 / (end - start) as f64
}

pub(crate) fn lerp_i32(a: i32, b: i32, t: f64) -> i32 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round() as i32
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

pub(crate) fn lerp_u32_positive(a: u32, b: u32, t: f64) -> u32 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().max(1.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
