use crate::bounce::BoundedOscillator;
use crate::fade::FadingDrawable;
use crate::gradient::GradientInterpolator;
use interface::{Circle, Graphics};

/// A circle bouncing between the walls and leaving a fading trail behind.
#[derive(Debug, Clone)]
pub struct BouncingOrb {
    x: BoundedOscillator,
    y: BoundedOscillator,
    radius: i32,
    delta: [i32; 2],
    gradient: GradientInterpolator,
    trail: Vec<FadingDrawable>,
    trail_ticks: u32,
    stopped: bool,
    /// the newest circle drawn, which is one tick behind the position
    shown: Option<Circle>,
}

impl BouncingOrb {
    pub fn new(
            x: BoundedOscillator,  y: BoundedOscillator,
            radius: i32,  delta: [i32; 2],
            gradient: GradientInterpolator,  trail_ticks: u32,
    ) -> Self {
        BouncingOrb {
            x,
            y,
            radius,
            delta,
            gradient,
            trail: Vec::new(),
            trail_ticks,
            stopped: false,
            shown: None,
        }
    }

    /// Keeps the whole circle inside a `size` area.
    pub fn inside(
            size: [i32; 2],  radius: i32,  start: [i32; 2],  delta: [i32; 2],
            gradient: GradientInterpolator,  trail_ticks: u32,
    ) -> Self {
        let x = BoundedOscillator::new(radius, size[0]-1-radius, start[0]);
        let y = BoundedOscillator::new(radius, size[1]-1-radius, start[1]);
        Self::new(x, y, radius, delta, gradient, trail_ticks)
    }

    pub fn tick(&mut self,  gfx: &mut dyn Graphics) {
        // age the trail first, so that the newest circle is drawn on top next tick
        let mut shown = None;
        self.trail.retain_mut(|drawable| {
            shown = Some(drawable.circle());
            !drawable.tick(gfx)
        });
        self.shown = shown;

        if !self.stopped {
            self.x.advance(self.delta[0]);
            self.y.advance(self.delta[1]);
        }

        let color = self.gradient.next_color();
        self.trail.push(FadingDrawable::new(self.circle(), color, self.trail_ticks));
    }

    pub fn position(&self) -> [i32; 2] {
        [self.x.as_integer(), self.y.as_integer()]
    }

    pub fn circle(&self) -> Circle {
        Circle { center: self.position(), radius: self.radius }
    }

    /// Where the orb was last drawn, or where it is if it hasn't been drawn yet.
    pub fn shown(&self) -> Circle {
        self.shown.unwrap_or_else(|| self.circle() )
    }

    /// Hit-test against the circle on screen.
    pub fn contains(&self,  point: [i32; 2]) -> bool {
        let Circle { center: [x, y], radius } = self.shown();
        let (dx, dy) = (point[0] as i64 - x as i64, point[1] as i64 - y as i64);
        let radius = radius as i64;
        dx*dx + dy*dy <= radius*radius
    }

    /// Move directly, without bouncing.
    pub fn drag(&mut self,  delta: [i32; 2]) {
        self.x.displace(delta[0]);
        self.y.displace(delta[1]);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
    pub fn set_stopped(&mut self,  stopped: bool) {
        self.stopped = stopped;
    }
    pub fn delta(&self) -> [i32; 2] {
        self.delta
    }
    pub fn radius(&self) -> i32 {
        self.radius
    }
    pub fn x(&self) -> &BoundedOscillator {
        &self.x
    }
    pub fn y(&self) -> &BoundedOscillator {
        &self.y
    }
    pub fn gradient(&self) -> &GradientInterpolator {
        &self.gradient
    }
    pub fn trail(&self) -> &[FadingDrawable] {
        &self.trail
    }
}
