//! Tests for the fighter state machine.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::components::{Archetype, Body, Facing, FighterInput, Kinematics, Side};
    use crate::config::FightConfig;
    use crate::fighter::{spawn_placement, Action, AttackKind, CombatState};

    /// Один боец без App: state + body + kinematics
    struct Rig {
        state: CombatState,
        body: Body,
        kinematics: Kinematics,
        archetype: Archetype,
        config: FightConfig,
    }

    impl Rig {
        fn new(archetype: Archetype) -> Self {
            let config = FightConfig::default();
            let (position, facing) = spawn_placement(Side::One, &config);
            Self {
                state: CombatState::default(),
                body: Body::new(position, Vec2::new(50.0, 80.0), facing),
                kinematics: Kinematics::default(),
                archetype,
                config,
            }
        }

        fn tick(&mut self, input: FighterInput) -> Option<AttackKind> {
            self.state.update(
                &input,
                &mut self.body,
                &mut self.kinematics,
                self.archetype,
                &self.config,
            )
        }

        fn idle_ticks(&mut self, count: u32) {
            for _ in 0..count {
                self.tick(FighterInput::default());
            }
        }
    }

    fn press(build: impl FnOnce(&mut FighterInput)) -> FighterInput {
        let mut input = FighterInput::default();
        build(&mut input);
        input
    }

    #[test]
    fn test_walk_sets_velocity_and_facing() {
        let mut rig = Rig::new(Archetype::Fast);

        rig.tick(press(|i| i.move_left = true));

        assert_eq!(rig.kinematics.velocity.x, -4.0);
        assert_eq!(rig.body.facing, Facing::Left);
        assert_eq!(rig.state.action, Action::Walk);

        rig.tick(press(|i| i.move_right = true));
        assert_eq!(rig.kinematics.velocity.x, 4.0);
        assert_eq!(rig.body.facing, Facing::Right);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut rig = Rig::new(Archetype::Heavy);

        rig.tick(press(|i| {
            i.move_left = true;
            i.move_right = true;
        }));

        assert_eq!(rig.kinematics.velocity.x, -2.5);
        assert_eq!(rig.body.facing, Facing::Left);
    }

    #[test]
    fn test_no_input_damps_velocity() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.move_right = true));

        rig.tick(FighterInput::default());

        assert!((rig.kinematics.velocity.x - 2.0).abs() < 1e-6);
        assert_eq!(rig.state.action, Action::Idle);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut rig = Rig::new(Archetype::Fast);

        rig.tick(press(|i| i.jump = true));
        assert_eq!(rig.kinematics.velocity.y, -18.0);
        assert!(!rig.kinematics.on_ground);
        assert_eq!(rig.state.action, Action::Jump);

        // В воздухе повторный прыжок игнорируется
        rig.kinematics.velocity.y = -5.0;
        rig.tick(press(|i| i.jump = true));
        assert_eq!(rig.kinematics.velocity.y, -5.0);
    }

    #[test]
    fn test_jump_blocked_while_attacking() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.light_attack = true));

        rig.tick(press(|i| i.jump = true));

        assert!(rig.kinematics.on_ground);
        assert_eq!(rig.kinematics.velocity.y, 0.0);
        assert_eq!(rig.state.action, Action::LightAttack);
    }

    #[test]
    fn test_guard_halves_velocity_after_movement() {
        let mut rig = Rig::new(Archetype::Heavy);

        rig.tick(press(|i| {
            i.move_right = true;
            i.guard = true;
        }));

        assert!(rig.state.guarding);
        assert_eq!(rig.state.action, Action::Guard);
        assert_eq!(rig.kinematics.velocity.x, 1.25);

        // Guard держится только пока нажата кнопка
        rig.tick(FighterInput::default());
        assert!(!rig.state.guarding);
    }

    #[test]
    fn test_guard_mid_attack_keeps_attack_tag() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.heavy_attack = true));

        rig.tick(press(|i| i.guard = true));

        assert!(rig.state.guarding);
        assert!(rig.state.is_attacking());
        assert_eq!(rig.state.action, Action::HeavyAttack);
    }

    #[test]
    fn test_light_attack_lifecycle() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.move_right = true));

        let started = rig.tick(press(|i| i.light_attack = true));

        assert_eq!(started, Some(AttackKind::Light));
        assert!(rig.state.is_attacking());
        assert_eq!(rig.state.action, Action::LightAttack);
        assert_eq!(rig.kinematics.velocity.x, 0.0);
        assert_eq!(rig.state.cooldowns.attack, 20);

        // Активна 18 тиков (включая тик старта)
        rig.idle_ticks(17);
        assert!(rig.state.is_attacking());
        assert_eq!(rig.state.action, Action::LightAttack);

        rig.idle_ticks(1);
        assert!(!rig.state.is_attacking());
        assert_eq!(rig.state.action, Action::Idle);
        assert_eq!(rig.state.cooldowns.attack, 2);
    }

    #[test]
    fn test_light_attack_on_cooldown_is_ignored() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.light_attack = true));
        rig.idle_ticks(18);
        assert!(rig.state.cooldowns.attack > 0);

        let started = rig.tick(press(|i| i.light_attack = true));

        assert_eq!(started, None);
        assert!(!rig.state.is_attacking());
        assert_ne!(rig.state.action, Action::LightAttack);
    }

    #[test]
    fn test_attack_request_mid_swing_does_not_restart() {
        let mut rig = Rig::new(Archetype::Fast);
        rig.tick(press(|i| i.light_attack = true));
        rig.idle_ticks(5);
        let before = rig.state.attack;

        rig.tick(press(|i| i.light_attack = true));

        let after = rig.state.attack.expect("still attacking");
        assert_eq!(after.ticks_remaining, before.expect("attacking").ticks_remaining - 1);
    }

    #[test]
    fn test_attack_priority_light_first() {
        let mut rig = Rig::new(Archetype::Heavy);

        let started = rig.tick(press(|i| {
            i.light_attack = true;
            i.heavy_attack = true;
            i.special = true;
        }));

        assert_eq!(started, Some(AttackKind::Light));
        assert_eq!(rig.state.cooldowns.special, 0);
    }

    #[test]
    fn test_heavy_shares_attack_cooldown() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.tick(press(|i| i.heavy_attack = true));
        assert_eq!(rig.state.cooldowns.attack, 40);

        rig.idle_ticks(30);
        let started = rig.tick(press(|i| i.light_attack = true));
        assert_eq!(started, None);

        // Special на отдельном cooldown
        let started = rig.tick(press(|i| {
            i.light_attack = true;
            i.special = true;
        }));
        assert_eq!(started, Some(AttackKind::Special));
    }

    #[test]
    fn test_all_buttons_resolve_by_priority() {
        let mut rig = Rig::new(Archetype::Heavy);

        let started = rig.tick(FighterInput::mash());

        assert_eq!(started, Some(AttackKind::Light));
        assert_eq!(rig.state.action, Action::LightAttack);
        assert!(rig.state.guarding);
        assert_eq!(rig.body.facing, Facing::Left);
        assert!(!rig.kinematics.on_ground);
        assert_eq!(rig.kinematics.velocity.y, -15.0);
        assert_eq!(rig.kinematics.velocity.x, 0.0);
    }

    #[test]
    fn test_special_cooldown_blocks_reuse() {
        let mut rig = Rig::new(Archetype::Fast);

        let started = rig.tick(press(|i| i.special = true));
        assert_eq!(started, Some(AttackKind::Special));
        assert_eq!(rig.state.cooldowns.special, 180);

        for tick in 1..180 {
            let started = rig.tick(press(|i| i.special = true));
            assert_eq!(started, None, "special re-triggered at tick {}", tick);
        }

        let started = rig.tick(press(|i| i.special = true));
        assert_eq!(started, Some(AttackKind::Special));
    }

    #[test]
    fn test_heavy_special_dashes_forward() {
        let mut rig = Rig::new(Archetype::Heavy);
        assert_eq!(rig.body.facing, Facing::Right);

        rig.tick(press(|i| i.special = true));

        assert_eq!(rig.kinematics.velocity.x, 8.0);
        assert!(!rig.state.invulnerable);
        assert_eq!(rig.state.action, Action::Special);
    }

    #[test]
    fn test_fast_special_teleport_invulnerability() {
        let mut rig = Rig::new(Archetype::Fast);

        rig.tick(press(|i| i.special = true));

        assert_eq!(rig.kinematics.velocity.x, 0.0);
        assert!(rig.state.invulnerable);
        assert_eq!(rig.state.invulnerable_ticks, 30);
    }

    #[test]
    fn test_invulnerability_expires() {
        let mut rig = Rig::new(Archetype::Fast);
        rig.state.make_invulnerable(30);

        rig.idle_ticks(29);
        assert!(rig.state.invulnerable);
        assert_eq!(rig.state.invulnerable_ticks, 1);

        rig.idle_ticks(1);
        assert!(!rig.state.invulnerable);
        assert_eq!(rig.state.invulnerable_ticks, 0);
    }

    #[test]
    fn test_cooldowns_never_underflow() {
        let mut rig = Rig::new(Archetype::Heavy);
        rig.idle_ticks(500);

        assert_eq!(rig.state.cooldowns.attack, 0);
        assert_eq!(rig.state.cooldowns.guard, 0);
        assert_eq!(rig.state.cooldowns.special, 0);
    }

    #[test]
    fn test_attack_flag_matches_action_tag() {
        let mut rig = Rig::new(Archetype::Heavy);
        let script = [
            FighterInput::mash(),
            press(|i| i.heavy_attack = true),
            press(|i| i.guard = true),
            press(|i| i.special = true),
            press(|i| i.move_left = true),
        ];

        for tick in 0..300 {
            rig.tick(script[tick % script.len()]);
            assert_eq!(
                rig.state.is_attacking(),
                rig.state.action.is_attack(),
                "tick {}: attack {:?} vs action {:?}",
                tick,
                rig.state.attack,
                rig.state.action
            );
        }
    }

    #[test]
    fn test_animation_clock_cycles() {
        let mut rig = Rig::new(Archetype::Fast);

        rig.idle_ticks(10);
        assert_eq!(rig.state.animation.frame, 1);

        rig.idle_ticks(30);
        assert_eq!(rig.state.animation.frame, 0);
    }
}
