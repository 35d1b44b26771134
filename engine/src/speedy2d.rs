use interface::game::*;

use crate::error::EngineError;
use crate::pacing::FramePacer;

#[cfg(not(target_arch = "wasm32"))]
use std::thread;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::time::Stopwatch;
use speedy2d::window::{
    MouseButton as spMouseButton,
    VirtualKeyCode,
    WindowHandler,
    WindowHelper,
};
#[cfg(target_arch="wasm32")]
use speedy2d::WebCanvas;
#[cfg(not(target_arch = "wasm32"))]
use speedy2d::Window;
#[cfg(not(target_arch="wasm32"))]
use speedy2d::window::{WindowCreationOptions, WindowSize};

#[cfg(not(target_arch="wasm32"))]
extern crate image;

#[cfg(target_arch="wasm32")]
const CANVAS_ID: &str = "orb_trails";
#[cfg(not(target_arch="wasm32"))]
const ICON_SIZE: u32 = 32;
#[cfg(not(target_arch="wasm32"))]
const ICON_COLOR: &str = "ff0000";

fn map_button(b: spMouseButton) -> Option<MouseButton> {
    match b {
        spMouseButton::Left => Some(MouseButton::Left),
        spMouseButton::Right => Some(MouseButton::Right),
        spMouseButton::Middle => Some(MouseButton::Middle),
        _ => None
    }
}

fn map_color([r, g, b]: Rgb) -> spColor {
    spColor::from_int_rgb(r, g, b)
}

/// Fits the logical drawing area into the window without stretching it,
/// centered with black bars on the sides that are left over.
fn letterbox_and_scale(window_size: [f32; 2],  logical_size: [f32; 2]) -> (Vector2<f32>, f32) {
    let scale = f32::min(window_size[0]/logical_size[0], window_size[1]/logical_size[1]);
    let offset = Vector2 {
        x: (window_size[0] - logical_size[0]*scale) / 2.0,
        y: (window_size[1] - logical_size[1]*scale) / 2.0,
    };
    (offset, scale)
}

/// A single orb fading towards its edge.
#[cfg(not(target_arch="wasm32"))]
fn orb_icon() -> image::RgbaImage {
    let color = hex(ICON_COLOR);
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let distance = f32::hypot(x as f32 - center, y as f32 - center) / (center + 0.5);
        if distance > 1.0 {
            return image::Rgba([0, 0, 0, 0]);
        }
        let [r, g, b] = color.map(|c| (c as f32 * (1.0 - distance)).round() as u8 );
        image::Rgba([r, g, b, 255])
    })
}

struct GameWrapper<G: Game> {
    game: G,
    logical_size: [f32; 2],
    window_size: [f32; 2], // changes if window is resized
    stopwatch: Stopwatch,
    pacer: FramePacer,
    frame: Frame,
}

impl<G: Game> GameWrapper<G> {
    fn tick(&mut self) {
        let now = self.stopwatch.secs_elapsed();
        self.frame.clear();
        self.game.tick(now, &mut self.frame);
    }
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,
            h: &mut WindowHelper<()>,
            info: speedy2d::window::WindowStartupInfo
    ) {
        let size = info.viewport_size_pixels().into_f32();
        self.window_size = [size.x, size.y];
        h.set_cursor_visible(true);
        if let Err(e) = h.set_cursor_grab(false) {
            log::warn!("cannot release cursor: {:?}", e);
        }

        // icon is not used in wasm, and threads don't work there.
        #[cfg(not(target_arch="wasm32"))]
        {
            let icon = orb_icon();
            let size = Vector2::new(icon.width(), icon.height());
            if let Err(e) = h.set_icon_from_rgba_pixels(icon.into_raw(), size) {
                log::warn!("cannot set window icon: {:?}", e);
            }

            let sender = h.create_user_event_sender();
            let mut pacer = self.pacer;
            thread::spawn(move || {
                let started = Instant::now();
                loop {
                    if pacer.poll(started.elapsed().as_secs_f64()) {
                        if sender.send_event(()).is_err() {
                            // the window is gone
                            break;
                        }
                    }
                    let wait = pacer.until_next(started.elapsed().as_secs_f64());
                    thread::sleep(Duration::from_secs_f64(wait));
                }
            });
        }
        log::info!("started with {}x{} pixels, {:.1} ms per frame",
            self.window_size[0], self.window_size[1], self.pacer.period()*1000.0
        );
    }

    fn on_user_event(&mut self,  h: &mut WindowHelper<()>,  _: ()) {
        self.tick();
        h.request_redraw();
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        // no threads in wasm, so poll the schedule here
        #[cfg(target_arch="wasm32")]
        {
            if self.pacer.poll(self.stopwatch.secs_elapsed()) {
                self.tick();
            }
        }

        g.clear_screen(spColor::BLACK);
        let (offset, scale) = letterbox_and_scale(self.window_size, self.logical_size);
        for &(circle, color) in self.frame.shapes() {
            let center = Vector2 {
                x: circle.center[0] as f32,
                y: circle.center[1] as f32,
            }*scale + offset;
            g.draw_circle(center, circle.radius as f32 * scale, map_color(color));
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<()>,  size: speedy2d::dimen::UVec2) {
        self.window_size[0] = size.into_f32().x;
        self.window_size[1] = size.into_f32().y;
    }

    fn on_mouse_move(&mut self,  _: &mut WindowHelper<()>,  pos: Vector2<f32>) {
        let (offset, scale) = letterbox_and_scale(self.window_size, self.logical_size);
        let pos = (pos - offset) / scale;
        self.game.mouse_move([pos.x, pos.y]);
    }

    fn on_mouse_button_down(&mut self,  _: &mut WindowHelper<()>,  button: spMouseButton) {
        if let Some(button) = map_button(button) {
            self.game.mouse_press(button);
        }
    }

    fn on_mouse_button_up(&mut self,  _: &mut WindowHelper<()>,  button: spMouseButton) {
        if let Some(button) = map_button(button) {
            self.game.mouse_release(button);
        }
    }

    fn on_key_down(
            &mut self,
            h: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        if key == Some(VirtualKeyCode::Escape) {
            self.game.shutdown();
            h.terminate_loop();
        }
    }
}

#[cfg(target_arch="wasm32")]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  _: &'static str) -> Result<(), EngineError> {
    // .unregister_when_dropped() would make the animation end immediately.
    WebCanvas::new_for_id(CANVAS_ID, wrapper).map_err(|e| EngineError::Canvas {
        id: CANVAS_ID,
        message: format!("{:?}", e),
    })?;
    Ok(())
}

#[cfg(not(target_arch="wasm32"))]
fn run<G:Game+'static>(wrapper: GameWrapper<G>,  name: &'static str) -> Result<(), EngineError> {
    let window_size = Vector2 { x: wrapper.logical_size[0], y: wrapper.logical_size[1] };
    let window_size = WindowSize::ScaledPixels(window_size);
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(name, options)
        .map_err(|e| EngineError::Window(format!("{:?}", e)) )?;
    window.run_loop(wrapper)
}

/// Open a window and animate `game` in it until the window is closed.
/// Only returns on error, or immediately on wasm.
#[inline(never)]
pub fn start<G:Game+'static>(game: G,  name: &'static str) -> Result<(), EngineError> {
    let [width, height] = game.size();
    let logical_size = [width as f32, height as f32];
    let wrapper = GameWrapper {
        logical_size,
        window_size: logical_size,
        stopwatch: Stopwatch::new().map_err(|e| EngineError::Stopwatch(format!("{:?}", e)) )?,
        pacer: FramePacer::new(game.frame_rate()),
        frame: Frame::default(),
        game,
    };
    run(wrapper, name)
}
