use rand::Rng;

use crate::constants::{MAX_SPINS, MIN_SPINS, MIN_SPIN_OPTIONS};

/// Spin lifecycle. The visual animation is driven elsewhere; this only
/// tracks whether one is in flight and which wedge it must stop on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinSelector {
    pub is_spinning: bool,
    pub selected_index: Option<usize>,
}

impl SpinSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a wedge in `[0, count)`. Returns `None` without touching any
    /// state when a spin is already running or there are fewer than two options.
    pub fn spin<R: Rng>(&mut self, count: usize, rng: &mut R) -> Option<usize> {
        if self.is_spinning || count < MIN_SPIN_OPTIONS {
            return None;
        }
        let index = rng.gen_range(0..count);
        self.selected_index = Some(index);
        self.is_spinning = true;
        Some(index)
    }

    /// Animation finished.
    pub fn complete(&mut self) -> Option<usize> {
        if !self.is_spinning {
            return None;
        }
        self.is_spinning = false;
        self.selected_index
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }
}

/// Where a spin stops and how many full turns it makes on the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub index: usize,
    pub turns: f64,
}

impl SpinPlan {
    pub fn draw<R: Rng>(index: usize, rng: &mut R) -> Self {
        Self {
            index,
            turns: rng.gen_range(MIN_SPINS..=MAX_SPINS),
        }
    }
}

/// Final wheel rotation, in degrees, for a spin that stops on `index`.
///
/// Wedge `i` spans `[i, i + 1) * 360 / count` clockwise from 12 o'clock when
/// the wheel is at rotation 0, and the pointer sits at 12 o'clock. The result
/// is always ahead of `current` by at least `turns` full revolutions.
pub fn target_rotation(current: f64, index: usize, count: usize, turns: f64) -> f64 {
    let count = count.max(1) as f64;
    let segment = 360.0 / count;
    let wedge_center = (index as f64 + 0.5) * segment;
    let target = (360.0 - wedge_center).rem_euclid(360.0);
    let normalized_current = current.rem_euclid(360.0);
    let adjustment = (target - normalized_current).rem_euclid(360.0);
    current + turns.floor() * 360.0 + adjustment
}

/// Deceleration curve used by the spin animation: 1 - (1 - t)^4.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Which wedge sits under the pointer at `rotation`.
    fn wedge_at(rotation: f64, count: usize) -> usize {
        let count = count.max(1);
        let segment = 360.0 / count as f64;
        let angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
        ((angle / segment) as usize).min(count - 1)
    }

    #[test]
    fn test_spin_requires_two_options() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spin = SpinSelector::new();
        assert_eq!(spin.spin(0, &mut rng), None);
        assert_eq!(spin.spin(1, &mut rng), None);
        assert_eq!(spin, SpinSelector::new());
    }

    #[test]
    fn test_spin_ignored_while_spinning() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut spin = SpinSelector::new();
        let first = spin.spin(2, &mut rng).unwrap();
        assert!(first < 2);
        let snapshot = spin.clone();
        assert_eq!(spin.spin(2, &mut rng), None);
        assert_eq!(spin, snapshot);

        assert_eq!(spin.complete(), Some(first));
        assert!(!spin.is_spinning);
        assert_eq!(spin.complete(), None);
        assert_eq!(spin.selected_index, Some(first));
    }

    #[test]
    fn test_spin_uniformity() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let k = 3;
        let trials = 60_000;
        let mut counts = vec![0usize; k];
        for _ in 0..trials {
            let mut spin = SpinSelector::new();
            counts[spin.spin(k, &mut rng).unwrap()] += 1;
        }
        let expected = trials as f64 / k as f64;
        for c in counts {
            let deviation = (c as f64 - expected).abs() / expected;
            assert!(deviation < 0.03, "bucket off by {:.3}", deviation);
        }
    }

    #[test]
    fn test_target_rotation_lands_on_wedge() {
        for count in 2..9 {
            for index in 0..count {
                for current in [0.0, 90.0, 725.5, 10_000.0] {
                    let end = target_rotation(current, index, count, 5.0);
                    assert!(end >= current + 5.0 * 360.0);
                    assert!(end < current + 6.0 * 360.0);
                    assert_eq!(wedge_at(end, count), index, "count {} index {}", count, index);
                }
            }
        }
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
