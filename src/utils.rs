pub const INTEGER_TOLERANCE: f64 = 1e-9;

/// Whether `value` sits within `tolerance` of the nearest integer.
pub fn is_integer_within_tolerance(value: f64, tolerance: f64) -> bool {
    (value - value.round()).abs() <= tolerance
}

pub fn is_integer(value: f64) -> bool {
    is_integer_within_tolerance(value, INTEGER_TOLERANCE)
}

// Snap "effectively integer" floats, leaves the others untouched
#[inline(always)]
pub fn snap_to_integer(value: f64) -> f64 {
    if value.is_finite() && is_integer(value) {
        // `+ 0.0` turns -0.0 into 0.0
        value.round() + 0.0
    } else {
        value
    }
}

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
