//! Smooth color transitions: a lead-in sequence played once,
//! then a cycle sequence repeated forever.

use crate::wrap::WrappingCounter;
use interface::Rgb;

use std::mem;

/// An owned sequence of color keys.
///
/// A single color converts into a sequence of one.
#[derive(Debug, Clone, PartialEq,Eq, Default)]
pub struct ColorKeys(pub Vec<Rgb>);

impl From<Rgb> for ColorKeys {
    fn from(color: Rgb) -> Self {
        ColorKeys(vec![color])
    }
}
impl From<Vec<Rgb>> for ColorKeys {
    fn from(colors: Vec<Rgb>) -> Self {
        ColorKeys(colors)
    }
}
impl From<&[Rgb]> for ColorKeys {
    fn from(colors: &[Rgb]) -> Self {
        ColorKeys(colors.to_vec())
    }
}
impl<const N: usize> From<[Rgb; N]> for ColorKeys {
    fn from(colors: [Rgb; N]) -> Self {
        ColorKeys(colors.to_vec())
    }
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Phase {
    /// Both keys are from the lead-in.
    InLead,
    /// Blending the last lead-in key into the first cycle key.
    LeadToCycle,
    InCycle,
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
enum Cursor {
    Lead(usize),
    Cycle(WrappingCounter),
}

#[derive(Debug, Clone)]
pub struct GradientInterpolator {
    lead_in: Vec<Rgb>,
    cycle: Vec<Rgb>,
    segment_length: u32,
    position: u32,
    current: Cursor,
    next: Cursor,
    phase: Phase,
    last: Rgb,
}

fn blend(from: Rgb,  to: Rgb,  t: f32) -> Rgb {
    let mut out = [0; 3];
    for (channel, (&a, &b)) in out.iter_mut().zip(from.iter().zip(&to)) {
        let (a, b) = (a as f32, b as f32);
        *channel = (a + (b-a)*t).round() as u8;
    }
    out
}

impl GradientInterpolator {
    /// A `segment_length` of 0 is treated as 1.
    /// Without cycle keys the last lead-in key (or black) is held forever.
    pub fn new(
            lead_in: impl Into<ColorKeys>,
            cycle: impl Into<ColorKeys>,
            segment_length: u32,
    ) -> Self {
        let lead_in = lead_in.into().0;
        let mut cycle = cycle.into().0;
        if cycle.is_empty() {
            cycle.push(lead_in.last().copied().unwrap_or([0; 3]));
        }
        let mut gradient = GradientInterpolator {
            lead_in,
            cycle,
            segment_length: segment_length.max(1),
            position: 0,
            current: Cursor::Lead(0),
            next: Cursor::Lead(1),
            phase: Phase::InLead,
            last: [0; 3],
        };
        gradient.settle();
        gradient
    }

    /// Move cursors that have run off the end of the lead-in into the cycle.
    fn settle(&mut self) {
        let lead_len = self.lead_in.len();
        let cycle_len = self.cycle.len() as i32;
        if let Cursor::Lead(i) = self.next {
            if i >= lead_len {
                let overflow = (i - lead_len) as i32;
                self.next = Cursor::Cycle(WrappingCounter::new(0, cycle_len, overflow));
                if self.phase == Phase::InLead {
                    self.phase = Phase::LeadToCycle;
                }
            }
        }
        if let Cursor::Lead(i) = self.current {
            if i >= lead_len {
                let overflow = (i - lead_len) as i32;
                self.current = Cursor::Cycle(WrappingCounter::new(0, cycle_len, overflow));
                self.phase = Phase::InCycle;
            }
        }
    }

    fn step(cursor: &mut Cursor) {
        match cursor {
            Cursor::Lead(i) => *i += 1,
            Cursor::Cycle(counter) => counter.advance(1),
        }
    }

    fn key(&self,  cursor: Cursor) -> Rgb {
        match cursor {
            Cursor::Lead(i) => self.lead_in[i],
            Cursor::Cycle(counter) => self.cycle[counter.as_index()],
        }
    }

    /// Returns the color computed by the previous call, starting with black,
    /// so that orbs fade in.
    pub fn next_color(&mut self) -> Rgb {
        let t = self.position as f32 / self.segment_length as f32;
        let color = blend(self.current_key(), self.next_key(), t);

        self.position += 1;
        if self.position == self.segment_length {
            self.position = 0;
            Self::step(&mut self.current);
            Self::step(&mut self.next);
            self.settle();
        }
        mem::replace(&mut self.last, color)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn position(&self) -> u32 {
        self.position
    }
    pub fn segment_length(&self) -> u32 {
        self.segment_length
    }
    pub fn current_key(&self) -> Rgb {
        self.key(self.current)
    }
    pub fn next_key(&self) -> Rgb {
        self.key(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = [0, 0, 0];
    const RED: Rgb = [255, 0, 0];
    const GREEN: Rgb = [0, 255, 0];
    const BLUE: Rgb = [0, 0, 255];

    #[test]
    fn starts_black() {
        let mut g = GradientInterpolator::new([RED, GREEN], [BLUE], 10);
        assert_eq!(g.next_color(), BLACK);
        // lags one call behind
        assert_eq!(g.next_color(), RED);
    }

    #[test]
    fn lead_in_blends_into_cycle() {
        let mut g = GradientInterpolator::new([BLACK, RED], [GREEN], 4);
        let colors: Vec<Rgb> = (0..12).map(|_| g.next_color() ).collect();
        assert_eq!(&colors[..5], &[BLACK, BLACK, [64, 0, 0], [128, 0, 0], [191, 0, 0]]);
        assert_eq!(&colors[5..9], &[RED, [191, 64, 0], [128, 128, 0], [64, 191, 0]]);
        assert!(colors[9..].iter().all(|&c| c == GREEN ));
    }

    #[test]
    fn phases() {
        let mut g = GradientInterpolator::new([BLACK, RED], [GREEN], 4);
        assert_eq!(g.phase(), Phase::InLead);
        for _ in 0..4 {
            g.next_color();
        }
        // next is already in the cycle while current is not
        assert_eq!(g.phase(), Phase::LeadToCycle);
        assert_eq!((g.current_key(), g.next_key()), (RED, GREEN));
        for _ in 0..4 {
            g.next_color();
        }
        assert_eq!(g.phase(), Phase::InCycle);
        assert_eq!((g.current_key(), g.next_key()), (GREEN, GREEN));
    }

    #[test]
    fn one_key_step_per_segment() {
        let mut g = GradientInterpolator::new([BLACK, RED, GREEN], [BLUE], 7);
        for _ in 0..6 {
            g.next_color();
        }
        assert_eq!((g.current_key(), g.position()), (BLACK, 6));
        g.next_color();
        assert_eq!((g.current_key(), g.next_key(), g.position()), (RED, GREEN, 0));
    }

    #[test]
    fn cycle_loops() {
        let mut g = GradientInterpolator::new(Vec::<Rgb>::new(), [RED, GREEN, BLUE], 1);
        assert_eq!(g.phase(), Phase::InCycle);
        let keys: Vec<Rgb> = (0..7).map(|_| {
            let key = g.current_key();
            g.next_color();
            key
        }).collect();
        assert_eq!(keys, [RED, GREEN, BLUE, RED, GREEN, BLUE, RED]);
    }

    #[test]
    fn single_color_lead_in() {
        let g = GradientInterpolator::new(RED, [GREEN, BLUE], 3);
        assert_eq!(g.phase(), Phase::LeadToCycle);
        assert_eq!((g.current_key(), g.next_key()), (RED, GREEN));
    }

    #[test]
    fn degenerate_inputs() {
        let mut g = GradientInterpolator::new([RED, GREEN], Vec::<Rgb>::new(), 0);
        assert_eq!(g.segment_length(), 1);
        for _ in 0..5 {
            g.next_color();
        }
        assert_eq!(g.next_color(), GREEN);
        let mut empty = GradientInterpolator::new(Vec::<Rgb>::new(), Vec::<Rgb>::new(), 2);
        for _ in 0..5 {
            assert_eq!(empty.next_color(), BLACK);
        }
    }

    #[test]
    fn keys_are_copied() {
        let mut keys = vec![RED, GREEN];
        let g = GradientInterpolator::new(keys.as_slice(), keys.clone(), 2);
        keys[0] = BLUE;
        assert_eq!(g.current_key(), RED);
    }

    #[test]
    fn channels_stay_between_keys() {
        let keys = [[10, 200, 30], [250, 0, 30], [40, 90, 255]];
        let mut g = GradientInterpolator::new(keys, keys, 13);
        let mut bounds = Vec::new();
        let mut colors = Vec::new();
        for _ in 0..200 {
            bounds.push((g.current_key(), g.next_key()));
            colors.push(g.next_color());
        }
        // each color is returned by the call after the one that computed it
        for ((a, b), color) in bounds.iter().zip(&colors[1..]) {
            for c in 0..3 {
                assert!(a[c].min(b[c]) <= color[c] && color[c] <= a[c].max(b[c]));
            }
        }
    }
}
