#![allow(missing_docs)]

use ecocycle::simulation::grass::{DEFAULT_REGROW_TIME, GrassPatch, GrassState};

fn assert_regrowth_law(regrow_time: i32) {
    let mut patch = GrassPatch::new(true, regrow_time);
    assert!(patch.eat());

    for tick in 0..regrow_time {
        assert!(
            !patch.is_grown(),
            "patch regrew after {} of {} ticks",
            tick,
            regrow_time
        );
        patch.step();
    }
    assert!(patch.is_grown());
    assert_eq!(patch.regrow_timer(), 0);
}

#[test]
fn test_regrowth_after_one_tick() {
    assert_regrowth_law(1);
}

#[test]
fn test_regrowth_after_twenty_ticks() {
    assert_regrowth_law(20);
}

#[test]
fn test_eat_depleted_patch_keeps_timer() {
    let mut patch = GrassPatch::default();
    assert_eq!(patch.regrow_time_default(), DEFAULT_REGROW_TIME);

    assert!(patch.eat());
    assert_eq!(patch.regrow_timer(), 20);

    patch.step();
    patch.step();
    patch.step();
    assert_eq!(patch.regrow_timer(), 17);

    assert!(!patch.eat());
    assert_eq!(patch.regrow_timer(), 17);
    assert_eq!(patch.state, GrassState::Depleted { timer: 17 });
}

#[test]
fn test_seeded_depleted_patch_regrows_on_first_step() {
    let mut patch = GrassPatch::new(false, 20);
    assert!(!patch.is_grown());
    assert_eq!(patch.regrow_timer(), 0);

    patch.step();
    assert!(patch.is_grown());
}

#[test]
fn test_grown_patch_ignores_step() {
    let mut patch = GrassPatch::new(true, 5);
    for _ in 0..10 {
        patch.step();
        assert!(patch.is_grown());
        assert_eq!(patch.regrow_timer(), 0);
    }
}

#[test]
fn test_timer_positive_only_while_depleted() {
    let mut patch = GrassPatch::new(true, 4);
    for tick in 0..30 {
        if tick % 7 == 0 {
            patch.eat();
        }
        patch.step();
        if patch.regrow_timer() > 0 {
            assert!(!patch.is_grown());
        }
    }
}
