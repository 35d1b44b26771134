#[derive(Debug, Clone,Copy, PartialEq,Eq, Default)]
pub enum SpanPolicy {
    #[default]
    Fixed,
    /// The span grows by the lower bound before every advance.
    /// This is how the counter has always behaved with a non-zero lower bound,
    /// and is kept for anything that depends on it.
    LegacyGrowing,
}

/// An integer confined to `[lo, hi)` which wraps around.
///
/// lo = 0, hi = 10, value = 0, always +3:
/// 0, 3, 6, 9, 2, 5, 8, 1, 4, 7, 0, 3, ...
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct WrappingCounter {
    shift: i32,
    span: i32,
    value: i32,
    policy: SpanPolicy,
}

impl WrappingCounter {
    pub fn new(lo: i32,  hi: i32,  value: i32) -> Self {
        Self::with_policy(lo, hi, value, SpanPolicy::Fixed)
    }

    pub fn with_policy(lo: i32,  hi: i32,  value: i32,  policy: SpanPolicy) -> Self {
        let span = i32::max(hi - lo, 1);
        WrappingCounter {
            shift: lo,
            span,
            value: (value - lo).rem_euclid(span) + lo,
            policy,
        }
    }

    pub fn advance(&mut self,  delta: i32) {
        if self.policy == SpanPolicy::LegacyGrowing {
            self.span = i32::max(self.span.saturating_add(self.shift), 1);
        }
        self.value = (self.value + delta - self.shift).rem_euclid(self.span) + self.shift;
    }

    pub fn as_integer(&self) -> i32 {
        self.value
    }
    /// Position counted from `lo`, in `0..span`.
    pub fn as_index(&self) -> usize {
        (self.value - self.shift) as usize
    }
    pub fn span(&self) -> i32 {
        self.span
    }
}
