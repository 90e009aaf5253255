//! Общие хелперы для integration тестов: headless App, ручная расстановка бойцов.

#![allow(dead_code)]

use bevy::prelude::*;
use pocketbrawl_simulation::round::FighterSetup;
use pocketbrawl_simulation::{
    capture_snapshot, create_headless_app_with_config, start_match, step_tick, submit_input,
    Archetype, Body, CombatState, Facing, FightConfig, Fighter, FighterHit, FighterInput,
    FighterSnapshot, Health, MatchSetup, Side,
};
use rand::Rng;

/// Дистанция, с которой спарринг-партнёр перестаёт идти и начинает бить
/// (внутри near-band AI, так что AI тоже отвечает).
const ENGAGE_DISTANCE: f32 = 70.0;

/// Оба бойца под управлением теста (без AI): Heavy (One) vs Fast (Two).
pub fn human_setup() -> MatchSetup {
    MatchSetup {
        fighters: [
            FighterSetup {
                archetype: Archetype::Heavy,
                ai_controlled: false,
            },
            FighterSetup {
                archetype: Archetype::Fast,
                ai_controlled: false,
            },
        ],
    }
}

/// App с запущенным матчем (раунд 1 идёт).
pub fn started_app(seed: u64, config: FightConfig, setup: MatchSetup) -> App {
    let mut app = create_headless_app_with_config(seed, config).expect("valid config");
    app.insert_resource(setup);
    start_match(app.world_mut());
    app
}

/// Heavy (One, скрипт теста) vs AI Fast (Two).
pub fn sparring_setup() -> MatchSetup {
    MatchSetup::default()
}

/// Скриптованный ввод: идти к противнику, развернуться к нему, в упоре
/// случайно бить (seeded RNG теста).
pub fn sparring_input(
    me: &FighterSnapshot,
    opponent: &FighterSnapshot,
    rng: &mut impl Rng,
) -> FighterInput {
    let mut input = FighterInput::default();
    let offset = opponent.x - me.x;
    let facing_opponent = match me.facing {
        Facing::Right => offset >= 0.0,
        Facing::Left => offset <= 0.0,
    };

    if offset.abs() > ENGAGE_DISTANCE || !facing_opponent {
        if offset >= 0.0 {
            input.move_right = true;
        } else {
            input.move_left = true;
        }
        return input;
    }

    input.light_attack = rng.gen_bool(0.5);
    input.heavy_attack = rng.gen_bool(0.3);
    input.special = rng.gen_bool(0.05);
    input.guard = rng.gen_bool(0.1);
    input
}

/// Один тик: скрипт за сторону One, затем step_tick. Возвращает удары тика.
pub fn sparring_tick(app: &mut App, rng: &mut impl Rng) -> Vec<FighterHit> {
    let snapshot = capture_snapshot(app.world_mut());
    if let (Some(me), Some(opponent)) = (snapshot.fighter(Side::One), snapshot.fighter(Side::Two)) {
        let input = sparring_input(me, opponent, rng);
        submit_input(app.world_mut(), Side::One, input).expect("side one spawned");
    }

    step_tick(app);
    events::<FighterHit>(app)
}

/// Heavy (One) vs Fast (Two), оба управляются тестом, дефолтный конфиг.
pub fn duel_app() -> App {
    started_app(42, FightConfig::default(), human_setup())
}

pub fn place(app: &mut App, side: Side, x: f32) {
    let world = app.world_mut();
    let mut fighters = world.query::<(&Fighter, &mut Body)>();
    for (fighter, mut body) in fighters.iter_mut(world) {
        if fighter.side == side {
            body.position.x = x;
        }
    }
}

pub fn set_health(app: &mut App, side: Side, current: u32) {
    let world = app.world_mut();
    let mut fighters = world.query::<(&Fighter, &mut Health)>();
    for (fighter, mut health) in fighters.iter_mut(world) {
        if fighter.side == side {
            health.current = current;
        }
    }
}

pub fn health(app: &mut App, side: Side) -> Health {
    let world = app.world_mut();
    let mut fighters = world.query::<(&Fighter, &Health)>();
    fighters
        .iter(world)
        .find(|(fighter, _)| fighter.side == side)
        .map(|(_, health)| *health)
        .expect("fighter spawned")
}

pub fn combat_state(app: &mut App, side: Side) -> CombatState {
    let world = app.world_mut();
    let mut fighters = world.query::<(&Fighter, &CombatState)>();
    fighters
        .iter(world)
        .find(|(fighter, _)| fighter.side == side)
        .map(|(_, state)| state.clone())
        .expect("fighter spawned")
}

/// События, записанные за последний `step_tick`.
pub fn events<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world()
        .resource::<Events<E>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}
