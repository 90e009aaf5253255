//! PocketBrawl Simulation Core
//!
//! ECS-симуляция поединка двух бойцов на Bevy 0.16 (headless, без рендера).
//!
//! Тик (FixedUpdate, 60Hz), строго по порядку:
//! 1. advance_round_clock — часы раунда
//! 2. drive_ai_fighters — AI policy → FighterInput
//! 3. update_fighters — state machine (movement, jump, guard, attacks)
//! 4. integrate_fighters — gravity, velocity, ground/arena clamp
//! 5. resolve_attacks — hit-box vs hurt-box, damage, knockback
//! 6. judge_round — KO / time up
//!
//! Rendering, audio и захват ввода живут у хоста: он пишет `FighterInput`
//! (`submit_input`), читает события и `capture_snapshot`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod error;
pub mod fighter;
pub mod geometry;
pub mod logger;
pub mod physics;
pub mod round;
pub mod snapshot;

// Re-export базовых типов для удобства
pub use combat::{AttackStarted, CombatPlugin, FighterHit};
pub use components::*;
pub use config::FightConfig;
pub use error::FightError;
pub use fighter::{Action, AttackKind, CombatState};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use round::{
    start_match, start_next_round, submit_input, MatchSetup, RoundEnded, RoundOutcome, RoundPhase,
    RoundPlugin, RoundState,
};
pub use snapshot::{capture_snapshot, FightSnapshot, FighterSnapshot};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// FightConfig, вставленный до плагина, сохраняется (иначе — defaults).
/// Вставленный конфиг должен пройти `FightConfig::validate`
/// (`create_headless_app_with_config` проверяет сам).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FightConfig>()
            .init_resource::<DeterministicRng>();

        let tick_rate = app.world().resource::<FightConfig>().round.ticks_per_second;

        app
            // Fixed timestep: один FixedUpdate = один тик симуляции
            .insert_resource(Time::<Fixed>::from_hz(f64::from(tick_rate)))
            .add_plugins((CombatPlugin, RoundPlugin))
            .add_systems(
                FixedUpdate,
                (
                    round::advance_round_clock,
                    ai::drive_ai_fighters,
                    fighter::update_fighters,
                    physics::integrate_fighters,
                    combat::resolve_attacks,
                    round::judge_round,
                )
                    .chain() // Последовательное выполнение для детерминизма
                    .run_if(round::round_in_progress),
            );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Раунд не запущен: вызвать `start_match(app.world_mut())`.
pub fn create_headless_app(seed: u64) -> App {
    build_headless_app(seed, FightConfig::default())
}

/// То же, с заданным FightConfig (TOML, тесты с короткими раундами)
///
/// Конфиг проверяется до сборки App: невалидный тюнинг (вероятность вне
/// [0, 1], нулевой tick rate) иначе паникует посреди тика.
pub fn create_headless_app_with_config(seed: u64, config: FightConfig) -> Result<App, FightError> {
    config.validate()?;
    Ok(build_headless_app(seed, config))
}

fn build_headless_app(seed: u64, config: FightConfig) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Ровно один тик симуляции (manual stepping, без накопления времени)
///
/// Перед тиком меняет буферы событий (как `event_update_system` в `First`):
/// после вызова читаются события этого тика и предыдущего, старые уходят.
pub fn step_tick(app: &mut App) {
    let world = app.world_mut();
    swap_event_buffers::<AttackStarted>(world);
    swap_event_buffers::<FighterHit>(world);
    swap_event_buffers::<RoundEnded>(world);

    world.run_schedule(FixedUpdate);
}

fn swap_event_buffers<E: Event>(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<E>>() {
        events.update();
    }
}
