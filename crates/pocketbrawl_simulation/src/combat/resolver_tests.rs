//! Tests for attack resolution.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{apply_hit, resolve, FighterView, Hit};
    use crate::components::{Body, Facing, Health, Kinematics, Side};
    use crate::config::AttackTable;
    use crate::fighter::{ActiveAttack, AttackKind, CombatState};

    fn view(side: Side, x: f32, facing: Facing, state: CombatState) -> FighterView {
        FighterView {
            side,
            body: Body::new(Vec2::new(x, 320.0), Vec2::new(50.0, 80.0), facing),
            state,
        }
    }

    fn swinging(kind: AttackKind) -> CombatState {
        CombatState {
            action: kind.action(),
            attack: Some(ActiveAttack {
                kind,
                ticks_remaining: 5,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_heavy_attack_hits_fast_fighter() {
        let attacks = AttackTable::default();
        let attacker = view(Side::One, 100.0, Facing::Right, swinging(AttackKind::Heavy));
        let defender = view(Side::Two, 150.0, Facing::Left, CombatState::default());

        let hits = resolve(&attacker, &defender, &attacks);
        assert_eq!(hits.len(), 1);

        let mut health = Health::new(80);
        let mut kinematics = Kinematics::default();
        let mut state = defender.state.clone();
        assert!(apply_hit(&hits[0], &mut health, &mut kinematics, &mut state, &attacks));

        // 80 - 25 = 55, отброшен вправо (прочь от attacker)
        assert_eq!(health.current, 55);
        assert_eq!(kinematics.velocity.x, 5.0);
        assert!(state.invulnerable);
        assert_eq!(state.invulnerable_ticks, 30);
    }

    #[test]
    fn test_knockback_points_left_when_defender_is_left() {
        let attacks = AttackTable::default();
        let attacker = view(Side::Two, 200.0, Facing::Left, swinging(AttackKind::Light));
        let defender = view(Side::One, 150.0, Facing::Right, CombatState::default());

        let hits = resolve(&attacker, &defender, &attacks);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].direction, -1.0);
        assert_eq!(hits[0].damage, 15);
    }

    #[test]
    fn test_landing_hit_knocks_back_along_attacker_facing() {
        let attacks = AttackTable::default();
        let kinds = [AttackKind::Light, AttackKind::Heavy, AttackKind::Special];
        let mut landed = 0;

        for facing in [Facing::Left, Facing::Right] {
            for kind in kinds {
                let attacker = view(Side::One, 300.0, facing, swinging(kind));
                for step in 0..=140 {
                    let x = 160.0 + step as f32 * 2.0;
                    let defender = view(Side::Two, x, Facing::Left, CombatState::default());
                    for hit in resolve(&attacker, &defender, &attacks) {
                        assert_eq!(
                            hit.direction,
                            facing.sign(),
                            "{:?} {:?} defender x {}",
                            facing,
                            kind,
                            x
                        );
                        landed += 1;
                    }
                }
            }
        }

        // Каждая атака в обе стороны что-то задела
        assert!(landed > 6);
    }

    #[test]
    fn test_guarding_defender_takes_nothing() {
        let attacks = AttackTable::default();
        let attacker = view(Side::One, 100.0, Facing::Right, swinging(AttackKind::Heavy));
        let guarding = CombatState {
            guarding: true,
            ..Default::default()
        };
        let defender = view(Side::Two, 150.0, Facing::Left, guarding);

        assert!(resolve(&attacker, &defender, &attacks).is_empty());
    }

    #[test]
    fn test_invulnerable_defender_takes_nothing() {
        let attacks = AttackTable::default();
        let attacker = view(Side::One, 100.0, Facing::Right, swinging(AttackKind::Special));
        let mut phased = CombatState::default();
        phased.make_invulnerable(12);
        let defender = view(Side::Two, 150.0, Facing::Left, phased);

        assert!(resolve(&attacker, &defender, &attacks).is_empty());
    }

    #[test]
    fn test_out_of_reach_misses() {
        let attacks = AttackTable::default();
        // Light reach 60: hitbox 150..210, defender начинается с 210
        let attacker = view(Side::One, 100.0, Facing::Right, swinging(AttackKind::Light));
        let defender = view(Side::Two, 210.0, Facing::Left, CombatState::default());

        assert!(resolve(&attacker, &defender, &attacks).is_empty());
    }

    #[test]
    fn test_facing_away_misses() {
        let attacks = AttackTable::default();
        let attacker = view(Side::One, 100.0, Facing::Left, swinging(AttackKind::Heavy));
        let defender = view(Side::Two, 150.0, Facing::Left, CombatState::default());

        assert!(resolve(&attacker, &defender, &attacks).is_empty());
    }

    #[test]
    fn test_mutual_hits_both_land() {
        let attacks = AttackTable::default();
        let one = view(Side::One, 100.0, Facing::Right, swinging(AttackKind::Light));
        let two = view(Side::Two, 150.0, Facing::Left, swinging(AttackKind::Heavy));

        let one_lands = resolve(&one, &two, &attacks);
        let two_lands = resolve(&two, &one, &attacks);

        assert_eq!(one_lands.len(), 1);
        assert_eq!(two_lands.len(), 1);
        assert_eq!(two_lands[0].damage, 25);
    }

    #[test]
    fn test_second_hit_same_tick_is_absorbed() {
        let attacks = AttackTable::default();
        let hit = Hit {
            attacker: Side::One,
            defender: Side::Two,
            attack: AttackKind::Light,
            damage: 15,
            direction: 1.0,
        };
        let mut health = Health::new(80);
        let mut kinematics = Kinematics::default();
        let mut state = CombatState::default();

        assert!(apply_hit(&hit, &mut health, &mut kinematics, &mut state, &attacks));
        assert!(!apply_hit(&hit, &mut health, &mut kinematics, &mut state, &attacks));

        assert_eq!(health.current, 65);
        assert_eq!(kinematics.velocity.x, 5.0);
    }

    #[test]
    fn test_damage_saturates_at_zero() {
        let attacks = AttackTable::default();
        let hit = Hit {
            attacker: Side::Two,
            defender: Side::One,
            attack: AttackKind::Special,
            damage: 35,
            direction: -1.0,
        };
        let mut health = Health::new(120);
        health.take_damage(110);
        let mut kinematics = Kinematics::default();
        let mut state = CombatState::default();

        apply_hit(&hit, &mut health, &mut kinematics, &mut state, &attacks);

        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }
}
