/* Copyright 2024 Torbjørn Birch Moltu
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#![cfg_attr(windows, windows_subsystem = "windows")]

extern crate engine;
extern crate game;

use game::SceneConfig;

#[cfg(not(target_arch="wasm32"))]
fn init_logging() {
    // RUST_LOG overrides the level
    let logger = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env();
    if let Err(e) = logger.init() {
        eprintln!("cannot initialize logging: {}", e);
    }
}

#[cfg(target_arch="wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn main() {
    init_logging();
    let game = game::create_game(SceneConfig::default());
    if let Err(e) = engine::start(game, game::NAME) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
