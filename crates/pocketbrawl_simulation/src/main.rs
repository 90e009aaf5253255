//! Headless симуляция PocketBrawl
//!
//! Heavy (скриптованный спарринг) vs AI Fast без рендера:
//! `pocketbrawl_simulation [seed] [config.toml]`

use pocketbrawl_simulation::logger::{set_log_level, LogLevel};
use pocketbrawl_simulation::{
    capture_snapshot, create_headless_app_with_config, log_error, start_match, start_next_round,
    step_tick, submit_input, Facing, FightConfig, FightError, FightSnapshot, FighterInput,
    MatchSetup, RoundOutcome, RoundState, Side,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Матч из одних time-out раундов иначе не закончится
const MAX_ROUNDS: u32 = 9;

/// Спарринг-партнёр бьёт только с этой дистанции (левые грани)
const ENGAGE_DISTANCE: f32 = 70.0;

fn main() -> Result<(), FightError> {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);
    let config = match args.next() {
        Some(path) => FightConfig::load(path)?,
        None => FightConfig::default(),
    };

    // Attack-start debug spam не нужен в консоли
    set_log_level(LogLevel::Info);

    println!("Starting PocketBrawl headless match (seed: {})", seed);

    let mut app = create_headless_app_with_config(seed, config)?;
    app.insert_resource(MatchSetup::default());
    start_match(app.world_mut());

    // Отдельный поток случайности для скрипта: AI RNG не трогаем
    let mut sparring_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    loop {
        while app.world().resource::<RoundState>().is_live() {
            let snapshot = capture_snapshot(app.world_mut());
            submit_input(app.world_mut(), Side::One, sparring_input(&snapshot, &mut sparring_rng))?;
            step_tick(&mut app);
        }

        let snapshot = capture_snapshot(app.world_mut());
        let result = match snapshot.winner {
            Some(RoundOutcome::Winner(side)) => format!("{:?} wins", side),
            Some(RoundOutcome::TimeExpired) | None => "time up".to_string(),
        };
        println!(
            "Round {}: {} at tick {} (score {}-{})",
            snapshot.round, result, snapshot.tick, snapshot.score[0], snapshot.score[1]
        );
        for fighter in &snapshot.fighters {
            println!(
                "  {:?} {} health {}/{}",
                fighter.side, fighter.name, fighter.health, fighter.max_health
            );
        }

        if snapshot.round >= MAX_ROUNDS {
            println!("No decision after {} rounds", MAX_ROUNDS);
            break;
        }

        match start_next_round(app.world_mut()) {
            Ok(()) => continue,
            Err(FightError::MatchDecided { winner }) => {
                println!("Match complete: {:?} wins", winner);
                break;
            }
            Err(err) => {
                log_error(&format!("Cannot start next round: {}", err));
                return Err(err);
            }
        }
    }

    Ok(())
}

/// Ввод за сторону One: сблизиться, развернуться к противнику, бить.
fn sparring_input(snapshot: &FightSnapshot, rng: &mut impl Rng) -> FighterInput {
    let mut input = FighterInput::default();
    let (Some(me), Some(opponent)) = (snapshot.fighter(Side::One), snapshot.fighter(Side::Two)) else {
        return input;
    };

    let offset = opponent.x - me.x;
    let facing_opponent = match me.facing {
        Facing::Right => offset >= 0.0,
        Facing::Left => offset <= 0.0,
    };

    if offset.abs() > ENGAGE_DISTANCE || !facing_opponent {
        input.move_right = offset >= 0.0;
        input.move_left = offset < 0.0;
        return input;
    }

    input.light_attack = rng.gen_bool(0.4);
    input.heavy_attack = rng.gen_bool(0.3);
    input.special = rng.gen_bool(0.05);
    input.guard = rng.gen_bool(0.15);
    input
}
