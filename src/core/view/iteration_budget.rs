pub const BASE_ITERATIONS: f64 = 512.0;
pub const ITERATION_GROWTH_RATE: f64 = 50.0;

/// Iteration budget for a viewport at `scale`:
/// `max(1, floor(512 + log2(scale) * 50))`.
///
/// Grows with the logarithm of the zoom so deeper views resolve more of the
/// boundary without the cost growing with the raw zoom factor.
#[must_use]
pub fn iterations_for_scale(scale: f64) -> u32 {
    let budget = (BASE_ITERATIONS + scale.log2() * ITERATION_GROWTH_RATE).floor();

    if budget >= 1.0 {
        // saturating cast
        budget as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_scale_gives_base_budget() {
        assert_eq!(iterations_for_scale(1.0), 512);
    }

    #[test]
    fn one_keyboard_zoom_step_gives_518() {
        assert_eq!(iterations_for_scale(1.1), 518);
    }

    #[test]
    fn doubling_scale_adds_growth_rate() {
        assert_eq!(iterations_for_scale(2.0), 562);
        assert_eq!(iterations_for_scale(1024.0), 1012);
    }

    #[test]
    fn deep_zoom_budget() {
        // log2(1e12) ≈ 39.86
        assert_eq!(iterations_for_scale(1e12), 2505);
    }

    #[test]
    fn budget_is_clamped_to_one_when_zoomed_far_out() {
        assert_eq!(iterations_for_scale(1e-6), 1);
        assert_eq!(iterations_for_scale(f64::MIN_POSITIVE), 1);
    }

    #[test]
    fn budget_never_decreases_as_scale_grows() {
        let mut previous = iterations_for_scale(1e-4);
        let mut scale = 1e-4;

        while scale < 1e14 {
            scale *= 1.37;
            let current = iterations_for_scale(scale);

            assert!(current >= previous, "scale={} {} < {}", scale, current, previous);
            previous = current;
        }
    }
}
