/// Schedules frames at a fixed rate on a clock measured in seconds.
///
/// Frames that were missed (because a tick took too long or the thread
/// slept too long) are skipped, not caught up with.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct FramePacer {
    period: f64,
    next: f64,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        FramePacer { period: (fps.max(1) as f64).recip(), next: 0.0 }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns whether a frame is due at `now`, and if so schedules the next one.
    pub fn poll(&mut self,  now: f64) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }

    /// How long to sleep before the next frame is due.
    pub fn until_next(&self,  now: f64) -> f64 {
        f64::max(self.next - now, 0.0)
    }
}
