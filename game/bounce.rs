/// An integer confined to `[lo, hi]` which bounces off both ends.
///
/// lo = 0, hi = 10, value = 0, always +3:
/// 0, 3, 6, 9, 8, 5, 2, 1, 4, 7, 10, 7, ...
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct BoundedOscillator {
    lo: i32,
    hi: i32,
    value: i32,
    direction: i32,
}

impl BoundedOscillator {
    /// An out-of-range `value` starts at `lo`.
    pub fn new(lo: i32,  hi: i32,  value: i32) -> Self {
        let (lo, hi) = if lo <= hi {(lo, hi)} else {(hi, lo)};
        let value = if lo <= value && value <= hi {value} else {lo};
        BoundedOscillator { lo, hi, value, direction: 1 }
    }

    /// Move `delta` steps in the current direction,
    /// reflecting off the bounds as many times as needed.
    pub fn advance(&mut self,  delta: i32) {
        if self.lo == self.hi {
            self.value = self.lo;
            return;
        }
        let (lo, hi) = (self.lo as i64, self.hi as i64);
        let period = 2 * (hi - lo);
        let mut value = self.value as i64 + delta as i64 * self.direction as i64;
        // every two reflections end up where they started, so skip whole periods
        // while staying on the same side of the range
        if value > hi {
            value = hi + 1 + (value - hi - 1).rem_euclid(period);
        } else if value < lo {
            value = lo - 1 - (lo - 1 - value).rem_euclid(period);
        }
        // a step longer than the range bounces more than once
        while value < lo || value > hi {
            if value < lo {
                value = lo + (lo - value);
                self.direction = 1;
            }
            if value > hi {
                value = hi - (value - hi);
                self.direction = -1;
            }
        }
        self.value = value as i32;
    }

    /// Move without bouncing, stopping at the bounds.
    pub fn displace(&mut self,  delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(self.lo, self.hi);
    }

    pub fn as_integer(&self) -> i32 {
        self.value
    }
    pub fn lo(&self) -> i32 {
        self.lo
    }
    pub fn hi(&self) -> i32 {
        self.hi
    }
    /// +1 or -1
    pub fn direction(&self) -> i32 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn invalid_start_snaps_to_lo() {
        assert_eq!(BoundedOscillator::new(10, 90, 91).as_integer(), 10);
        assert_eq!(BoundedOscillator::new(10, 90, 9).as_integer(), 10);
        assert_eq!(BoundedOscillator::new(10, 90, 90).as_integer(), 90);
        let reversed = BoundedOscillator::new(90, 10, 50);
        assert_eq!((reversed.lo(), reversed.hi(), reversed.as_integer()), (10, 90, 50));
    }

    #[test]
    fn documented_sequence() {
        let mut b = BoundedOscillator::new(0, 10, 0);
        let mut seen = Vec::new();
        for _ in 0..11 {
            b.advance(3);
            seen.push(b.as_integer());
        }
        assert_eq!(seen, [3, 6, 9, 8, 5, 2, 1, 4, 7, 10, 7]);
    }

    #[test]
    fn full_span_lands_on_hi_then_reflects() {
        let mut b = BoundedOscillator::new(10, 90, 10);
        b.advance(80);
        assert_eq!(b.as_integer(), 90);
        assert_eq!(b.direction(), 1);
        b.advance(5);
        assert_eq!(b.as_integer(), 85);
        assert_eq!(b.direction(), -1);
    }

    #[test]
    fn reflects_off_hi() {
        let mut x = BoundedOscillator::new(10, 90, 85);
        x.advance(7);
        assert_eq!(x.as_integer(), 88);
        assert_eq!(x.direction(), -1);
        // keeps going down with the same positive delta
        x.advance(7);
        assert_eq!(x.as_integer(), 81);
    }

    #[test]
    fn step_longer_than_range() {
        let mut b = BoundedOscillator::new(0, 10, 5);
        // 5+27 = 32 -> -12 -> 12 -> 8
        b.advance(27);
        assert_eq!(b.as_integer(), 8);
        assert_eq!(b.direction(), -1);
    }

    #[test]
    fn zero_width_range() {
        let mut b = BoundedOscillator::new(4, 4, 4);
        b.advance(3);
        assert_eq!(b.as_integer(), 4);
    }

    #[test]
    fn displace_clamps_without_turning() {
        let mut b = BoundedOscillator::new(0, 10, 5);
        b.displace(20);
        assert_eq!(b.as_integer(), 10);
        assert_eq!(b.direction(), 1);
        b.displace(-3);
        assert_eq!(b.as_integer(), 7);
    }

    #[test]
    fn extreme_deltas() {
        for &delta in &[i32::MAX, i32::MIN, i32::MIN+1] {
            let mut b = BoundedOscillator::new(0, 10, 10);
            b.advance(delta);
            assert!((0..=10).contains(&b.as_integer()), "{} after {}", b.as_integer(), delta);
            b.advance(delta);
            assert!((0..=10).contains(&b.as_integer()));
        }
        let mut wide = BoundedOscillator::new(i32::MIN, i32::MAX, i32::MAX);
        wide.advance(i32::MAX);
        assert_eq!((wide.as_integer(), wide.direction()), (0, -1));
    }

    #[test]
    fn whole_periods_change_nothing() {
        // all of these bounce at least once
        for &(start, delta) in &[(5, 7), (5, 27), (0, 20), (2, -5), (3, -40)] {
            let mut short = BoundedOscillator::new(0, 10, start);
            let mut long = short;
            short.advance(delta);
            let periods = delta.signum() * 20 * 100_000_000;
            long.advance(delta + periods);
            assert_eq!(long, short, "start {} delta {}", start, delta);
        }
    }

    proptest! {
        #[test]
        fn stays_in_range(
            lo in -100_000i32..100_000,
            width in 0i32..3000,
            start in 0i32..3000,
            deltas in prop::collection::vec(any::<i32>(), 1..50),
        ) {
            let hi = lo + width;
            let mut b = BoundedOscillator::new(lo, hi, lo + start.min(width));
            for delta in deltas {
                b.advance(delta);
                prop_assert!(lo <= b.as_integer() && b.as_integer() <= hi,
                    "{} outside [{}, {}]", b.as_integer(), lo, hi
                );
                prop_assert!(b.direction() == 1 || b.direction() == -1);
            }
        }
    }
}
