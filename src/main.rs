//! Immune Rush entry point
//!
//! Native headless run: loads settings, checks assets, then plays one round
//! with a scripted key pattern at 60 frames per second of virtual time and
//! reports the final score.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use immune_rush::Settings;
use immune_rush::assets::AssetId;
use immune_rush::audio::Soundtrack;
use immune_rush::platform::{Driver, TextHud};
use immune_rush::sim::{Direction, DriverEvent, GameEvent};

/// Optional path to a JSON settings file
const CONFIG_ENV: &str = "IMMUNE_RUSH_CONFIG";
/// Virtual frame time (~60 fps)
const FRAME_MS: u64 = 16;
/// How long each scripted direction is held
const SWEEP_MS: u64 = 1500;

fn main() {
    env_logger::init();
    log::info!("Immune Rush (headless) starting...");

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let settings = Settings::load_or_default(config_path.as_deref());

    let mut assets = settings.assets.verify();
    let extents = assets.sprite_extents(&settings.sprite_sizes);
    if !assets.is_ok() {
        log::warn!("{} asset problem(s); running with fallbacks", assets.problems.len());
    }
    let music = (!assets.has_problem(AssetId::Music)).then(|| settings.assets.path_of(AssetId::Music));

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed: {seed}");

    let mut driver = Driver::from_settings(&settings, extents, seed, TextHud::default(), Soundtrack::new(music));
    driver.push(DriverEvent::Activate);

    let pattern = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    let mut held: Option<Direction> = None;
    let mut elapsed = 0u64;

    while driver.state().is_running() {
        let want = pattern[((elapsed / SWEEP_MS) as usize) % pattern.len()];
        if held != Some(want) {
            if let Some(prev) = held {
                driver.push(DriverEvent::KeyUp(prev));
            }
            driver.push(DriverEvent::KeyDown(want));
            held = Some(want);
        }

        for event in driver.advance(FRAME_MS) {
            if let GameEvent::Ended(summary) = event {
                println!(
                    "Time's up! Your score: {} ({} pathogens cleared)",
                    summary.score, summary.pathogens_collected
                );
            }
        }
        elapsed += FRAME_MS;
    }

    log::info!("{}", driver.render().line());
}
