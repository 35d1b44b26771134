/* Copyright 2024 Torbjørn Birch Moltu
 *
 * This file is part of orb_trails.
 * You can redistribute it and/or modify it under the terms of the
 * GNU General Public License as published by the Free Software Foundation,
 * either version 3 of the License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::config::SceneConfig;
use crate::gradient::GradientInterpolator;
use crate::orb::BouncingOrb;
use ::interface::{Game, Graphics, MouseButton};

use std::mem;

extern crate fxhash;
use fxhash::{FxHashMap, FxHashSet};
use rand::Rng;

/// Pointer input, collected between frames and applied at the start of the next.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Down([i32; 2]),
    /// Pointer moved this much since the previous event.
    Move([i32; 2]),
    Up,
}

pub struct Scene {
    config: SceneConfig,
    orbs: Vec<BouncingOrb>,
    /// grabbed orbs and when they were last grabbed or dragged
    grabbed: FxHashMap<usize, f64>,
    pending: Vec<PointerEvent>,
    pointer: Option<[i32; 2]>,
}

/// Different orbs get different deltas as long as there are enough of them.
fn pick_deltas<R: Rng>(config: &SceneConfig,  rng: &mut R) -> Vec<[i32; 2]> {
    let (min, max) = config.delta_range;
    let available = config.distinct_deltas();
    if config.orb_count > available {
        log::warn!("{} orbs but only {} different deltas in {:?}, some will move in parallel",
            config.orb_count, available, config.delta_range
        );
    }
    let mut used = FxHashSet::default();
    let mut deltas = Vec::with_capacity(config.orb_count);
    while deltas.len() < config.orb_count {
        let delta = [rng.gen_range(min..=max), rng.gen_range(min..=max)];
        if used.insert(delta) || used.len() >= available {
            deltas.push(delta);
        }
    }
    deltas
}

impl Scene {
    pub fn new<R: Rng>(config: SceneConfig,  rng: &mut R) -> Self {
        let config = config.normalized();
        let size = [config.width as i32, config.height as i32];
        let radius = config.radius;
        let (min_time, max_time) = config.transition_time_range;

        let orbs = pick_deltas(&config, rng).into_iter().map(|delta| {
            let start = [
                rng.gen_range(radius..=size[0]-1-radius),
                rng.gen_range(radius..=size[1]-1-radius),
            ];
            let gradient = GradientInterpolator::new(
                    config.lead_in.clone(),
                    config.cycle.clone(),
                    rng.gen_range(min_time..=max_time),
            );
            BouncingOrb::inside(size, radius, start, delta, gradient, config.trail_ticks)
        }).collect::<Vec<_>>();

        log::info!("{} orbs in {}x{} at {} fps", orbs.len(), size[0], size[1], config.fps);
        Scene {
            config,
            orbs,
            grabbed: FxHashMap::default(),
            pending: Vec::new(),
            pointer: None,
        }
    }

    /// Queue pointer input for the next tick. Ignored unless interactive.
    pub fn handle(&mut self,  event: PointerEvent) {
        if self.config.interactive {
            self.pending.push(event);
        }
    }

    fn apply(&mut self,  event: PointerEvent,  now: f64) {
        match event {
            PointerEvent::Down(pos) => {
                for (i, orb) in self.orbs.iter_mut().enumerate() {
                    if orb.contains(pos) {
                        log::debug!("grabbed orb {} at {:?}", i, pos);
                        orb.set_stopped(true);
                        self.grabbed.insert(i, now);
                    }
                }
            }
            PointerEvent::Move(delta) => {
                for (&i, last) in self.grabbed.iter_mut() {
                    self.orbs[i].drag(delta);
                    *last = now;
                }
            }
            PointerEvent::Up => {
                let threshold = self.config.release_threshold;
                for (i, last) in self.grabbed.drain() {
                    // a quick release means it was clicked to stop it
                    if now - last >= threshold {
                        self.orbs[i].set_stopped(false);
                    }
                    log::debug!("released orb {} after {:.2}s, stopped: {}",
                        i, now-last, self.orbs[i].is_stopped()
                    );
                }
            }
        }
    }

    /// Apply queued input, then advance and draw every orb once.
    pub fn tick(&mut self,  now: f64,  gfx: &mut dyn Graphics) {
        for event in mem::take(&mut self.pending) {
            self.apply(event, now);
        }
        for orb in &mut self.orbs {
            orb.tick(gfx);
        }
    }

    pub fn shutdown(&mut self) {
        log::info!("shutting down with {} orbs", self.orbs.len());
        self.orbs.clear();
        self.grabbed.clear();
        self.pending.clear();
    }

    pub fn orbs(&self) -> &[BouncingOrb] {
        &self.orbs
    }
    pub fn is_grabbed(&self,  orb: usize) -> bool {
        self.grabbed.contains_key(&orb)
    }
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl Game for Scene {
    fn size(&self) -> [u32; 2] {
        [self.config.width, self.config.height]
    }
    fn frame_rate(&self) -> u32 {
        self.config.fps
    }
    fn tick(&mut self,  now: f64,  gfx: &mut dyn Graphics) {
        Scene::tick(self, now, gfx)
    }
    fn mouse_move(&mut self,  pos: [f32; 2]) {
        let pos = [pos[0].round() as i32, pos[1].round() as i32];
        if let Some(prev) = self.pointer.replace(pos) {
            let delta = [pos[0]-prev[0], pos[1]-prev[1]];
            if delta != [0, 0] {
                self.handle(PointerEvent::Move(delta));
            }
        }
    }
    fn mouse_press(&mut self,  button: MouseButton) {
        if let (MouseButton::Left, Some(pos)) = (button, self.pointer) {
            self.handle(PointerEvent::Down(pos));
        }
    }
    fn mouse_release(&mut self,  button: MouseButton) {
        if button == MouseButton::Left {
            self.handle(PointerEvent::Up);
        }
    }
    fn shutdown(&mut self) {
        Scene::shutdown(self)
    }
}
