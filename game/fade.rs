use interface::{Circle, Graphics, Rgb};

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Lifetime {
    Permanent,
    Ticks { total: u32, remaining: u32 },
}

/// A circle that fades to black over a fixed number of ticks.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct FadingDrawable {
    circle: Circle,
    color: Rgb,
    lifetime: Lifetime,
}

impl FadingDrawable {
    /// `ticks` of 0 is treated as 1.
    pub fn new(circle: Circle,  color: Rgb,  ticks: u32) -> Self {
        let ticks = ticks.max(1);
        FadingDrawable {
            circle,
            color,
            lifetime: Lifetime::Ticks { total: ticks, remaining: ticks },
        }
    }

    /// Never fades and never expires.
    pub fn permanent(circle: Circle,  color: Rgb) -> Self {
        FadingDrawable { circle, color, lifetime: Lifetime::Permanent }
    }

    /// Age by one tick and draw. Returns true when expired.
    pub fn tick(&mut self,  gfx: &mut dyn Graphics) -> bool {
        if let Lifetime::Ticks { remaining, .. } = &mut self.lifetime {
            *remaining = remaining.saturating_sub(1);
        }
        gfx.circle(self.circle, self.faded_color());
        self.is_expired()
    }

    /// Fraction of the original brightness.
    pub fn fade(&self) -> f32 {
        match self.lifetime {
            Lifetime::Permanent => 1.0,
            Lifetime::Ticks { total, remaining } => remaining as f32 / total as f32,
        }
    }

    pub fn faded_color(&self) -> Rgb {
        let fade = self.fade();
        self.color.map(|c| (c as f32 * fade).round() as u8 )
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.lifetime, Lifetime::Ticks { remaining: 0, .. })
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interface::Frame;

    const CIRCLE: Circle = Circle { center: [10, 20], radius: 5 };

    #[test]
    fn expires_after_n_ticks() {
        let mut frame = Frame::default();
        let mut d = FadingDrawable::new(CIRCLE, [200, 100, 50], 4);
        let mut fades = vec![d.fade()];
        for _ in 0..3 {
            assert!(!d.tick(&mut frame));
            fades.push(d.fade());
        }
        assert!(d.tick(&mut frame));
        fades.push(d.fade());
        assert!(fades.windows(2).all(|w| w[1] < w[0] ));
        let colors: Vec<Rgb> = frame.shapes().iter().map(|&(_, color)| color ).collect();
        assert_eq!(colors, [[150, 75, 38], [100, 50, 25], [50, 25, 13], [0, 0, 0]]);
        assert!(frame.shapes().iter().all(|&(circle, _)| circle == CIRCLE ));
    }

    #[test]
    fn single_tick() {
        let mut frame = Frame::default();
        let mut d = FadingDrawable::new(CIRCLE, [255; 3], 0);
        assert!(d.tick(&mut frame));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn permanent_never_expires() {
        let mut frame = Frame::default();
        let mut d = FadingDrawable::permanent(CIRCLE, [9, 8, 7]);
        for _ in 0..1000 {
            assert!(!d.tick(&mut frame));
        }
        assert_eq!(frame.len(), 1000);
        assert!(frame.shapes().iter().all(|&(_, color)| color == [9, 8, 7] ));
    }
}
