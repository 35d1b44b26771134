use interface::{hex, Rgb};

pub const WIDTH: u32 = 1366;
pub const HEIGHT: u32 = 768;
pub const FPS: u32 = 60;
pub const SCALE: f32 = 1.0;
pub const ORB_COUNT: usize = 5;
pub const DELTA_RANGE: (i32, i32) = (2, 6); // inclusive
pub const TRANSITION_TIME_RANGE: (u32, u32) = (50, 80); // ticks, inclusive
pub const ORB_RADIUS: i32 = 50; // before scaling
pub const TRAIL_TICKS: u32 = 120;
pub const RELEASE_THRESHOLD: f64 = 0.2; // seconds
/// Coordinates are `i32`.
const MAX_SIZE: u32 = i32::MAX as u32;
const LEAD_IN: [&str; 2] = ["000000", "ff0000"];
const CYCLE: [&str; 3] = ["ffff00", "00ffff", "ff00ff"];

/// Everything a scene is created from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Multiplies width, height and radius.
    pub scale: f32,
    pub orb_count: usize,
    pub delta_range: (i32, i32),
    pub transition_time_range: (u32, u32),
    pub radius: i32,
    pub trail_ticks: u32,
    /// Whether orbs can be grabbed with the mouse.
    pub interactive: bool,
    /// Releasing a grabbed orb sooner than this after the last move leaves it stopped.
    pub release_threshold: f64,
    pub lead_in: Vec<Rgb>,
    pub cycle: Vec<Rgb>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            scale: SCALE,
            orb_count: ORB_COUNT,
            delta_range: DELTA_RANGE,
            transition_time_range: TRANSITION_TIME_RANGE,
            radius: ORB_RADIUS,
            trail_ticks: TRAIL_TICKS,
            interactive: true,
            release_threshold: RELEASE_THRESHOLD,
            lead_in: LEAD_IN.iter().map(|&c| hex(c) ).collect(),
            cycle: CYCLE.iter().map(|&c| hex(c) ).collect(),
        }
    }
}

fn ordered<T: PartialOrd>((min, max): (T, T)) -> (T, T) {
    if min <= max {(min, max)} else {(max, min)}
}

impl SceneConfig {
    /// Applies `scale` and replaces unusable values, logging what was changed.
    /// The result has scale 1.0.
    pub fn normalized(&self) -> SceneConfig {
        let mut c = self.clone();
        if !(c.scale > 0.0 && c.scale.is_finite()) {
            log::warn!("scale {} is not positive, using {}", c.scale, SCALE);
            c.scale = SCALE;
        }
        c.width = (c.width as f32 * c.scale) as u32;
        c.height = (c.height as f32 * c.scale) as u32;
        c.radius = (c.radius as f32 * c.scale) as i32;
        c.scale = 1.0;

        if c.fps == 0 {
            log::warn!("fps cannot be 0, using {}", FPS);
            c.fps = FPS;
        }
        if c.radius < 1 {
            c.radius = 1;
        }
        if c.width > MAX_SIZE || c.height > MAX_SIZE {
            log::warn!("{}x{} is too big, limiting to {}", c.width, c.height, MAX_SIZE);
            c.width = c.width.min(MAX_SIZE);
            c.height = c.height.min(MAX_SIZE);
        }
        let max_radius = ((MAX_SIZE - 1) / 2) as i32;
        if c.radius > max_radius {
            log::warn!("radius {} is too big, limiting to {}", c.radius, max_radius);
            c.radius = max_radius;
        }
        // orbs need room to move
        let min_size = 2*c.radius as u32 + 1;
        if c.width < min_size || c.height < min_size {
            log::warn!("{}x{} cannot fit orbs with radius {}", c.width, c.height, c.radius);
            c.width = c.width.max(min_size);
            c.height = c.height.max(min_size);
        }
        c.delta_range = ordered(c.delta_range);
        c.transition_time_range = ordered(c.transition_time_range);
        c.transition_time_range.0 = c.transition_time_range.0.max(1);
        c.transition_time_range.1 = c.transition_time_range.1.max(1);
        if c.trail_ticks == 0 {
            c.trail_ticks = 1;
        }
        c
    }

    /// Number of different (dx, dy) pairs in `delta_range`.
    pub fn distinct_deltas(&self) -> usize {
        let (min, max) = ordered(self.delta_range);
        let per_axis = (max as i64 - min as i64 + 1) as usize;
        per_axis.saturating_mul(per_axis)
    }
}
