//! Colored circles bouncing around, leaving fading trails behind them.

pub mod bounce;
pub mod wrap;
pub mod gradient;
pub mod fade;
pub mod orb;
pub mod config;
pub mod scene;

pub use self::config::SceneConfig;
pub use self::scene::{Scene, PointerEvent};

pub const NAME: &str = "orb trails";

pub fn create_game(config: SceneConfig) -> Scene {
    Scene::new(config, &mut rand::thread_rng())
}
