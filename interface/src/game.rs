/// 8-bit red, green and blue.
pub type Rgb = [u8; 3];

/// The only draw primitive: a filled circle in logical pixels.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct Circle {
    pub center: [i32; 2],
    pub radius: i32,
}

pub trait Graphics {
    fn circle(&mut self,  circle: Circle,  color: Rgb);
}

/// Draw calls recorded during one tick, presented by the engine afterwards.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<(Circle, Rgb)>,
}

impl Frame {
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    /// In draw order, the last one ends up on top.
    pub fn shapes(&self) -> &[(Circle, Rgb)] {
        &self.shapes
    }
}

impl Graphics for Frame {
    fn circle(&mut self,  circle: Circle,  color: Rgb) {
        self.shapes.push((circle, color));
    }
}

/// Parse a hex string of 6 bytes into a color.
/// Format is rrggbb.
#[track_caller]
pub fn hex(color: &str) -> Rgb {
    if color.len() != 6 {
        panic!("color string must be 6 characters");
    }
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [r, g, b]
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

pub trait Game {
    /// Logical drawing area in pixels, letterboxed into the window by the engine.
    fn size(&self) -> [u32; 2];
    fn frame_rate(&self) -> u32;
    /// Advance one frame and record its draw calls.
    /// `now` is seconds since the engine started.
    fn tick(&mut self,  now: f64,  gfx: &mut dyn Graphics);
    /// `pos` is in logical pixels and can be outside the drawing area.
    fn mouse_move(&mut self,  pos: [f32; 2]);
    fn mouse_press(&mut self,  button: MouseButton);
    fn mouse_release(&mut self,  button: MouseButton);
    fn shutdown(&mut self) {}
}
