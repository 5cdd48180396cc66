use rowplot::data::numeric_field::*;

#[test]
fn unparsable_commit_reverts_to_committed_value() {
    let mut f = NumericField::new(42.0, 0.0, 100.0, 1.0);
    f.on_text_change("abc");
    assert_eq!(f.display_text(), "abc");
    assert_eq!(f.state(), FieldState::Editing);
    assert_eq!(f.value(), 42.0);

    assert!(!f.on_commit());
    assert_eq!(f.value(), 42.0);
    assert_eq!(f.display_text(), "42");
    assert_eq!(f.state(), FieldState::Idle);
}

#[test]
fn empty_commit_reverts() {
    let mut f = NumericField::new(0.05, 0.0, 1.0, 0.05);
    f.on_text_change("");
    f.on_commit();
    assert_eq!(f.display_text(), "0.05");
}

#[test]
fn commit_clamps_out_of_range_values() {
    let mut f = NumericField::new(80.0, 40.0, 120.0, 1.0);
    f.on_text_change("500");
    assert!(f.on_commit());
    assert_eq!(f.value(), 120.0);
    assert_eq!(f.display_text(), "120");

    f.on_text_change("-3");
    f.on_commit();
    assert_eq!(f.value(), 40.0);
}

#[test]
fn typing_does_not_change_committed_value() {
    let mut f = NumericField::new(10.0, 0.0, 20.0, 0.5);
    f.on_text_change("1");
    f.on_text_change("15");
    assert_eq!(f.value(), 10.0);
    f.on_commit();
    assert_eq!(f.value(), 15.0);
}

#[test]
fn increment_at_max_is_noop() {
    let mut f = NumericField::new(120.0, 40.0, 120.0, 1.0);
    assert!(f.at_max());
    assert!(!f.increment());
    assert_eq!(f.value(), 120.0);
}

#[test]
fn decrement_at_min_is_noop() {
    let mut f = NumericField::new(0.5, 0.5, 2.0, 0.05);
    assert!(f.at_min());
    assert!(!f.decrement());
    assert_eq!(f.value(), 0.5);
}

#[test]
fn step_clamps_to_bound() {
    let mut f = NumericField::new(19.8, 0.0, 20.0, 0.5);
    assert!(f.increment());
    assert_eq!(f.value(), 20.0);
    assert!(f.at_max());
}

#[test]
fn repeated_steps_do_not_drift() {
    let mut f = NumericField::new(0.5, 0.5, 2.0, 0.05);
    for _ in 0..10 {
        f.increment();
    }
    assert!((f.value() - 1.0).abs() < 1e-9);
    assert_eq!(f.display_text(), "1");

    let mut g = NumericField::new(0.001, 0.001, 0.01, 0.001);
    for _ in 0..3 {
        g.increment();
    }
    assert!((g.value() - 0.004).abs() < 1e-9);
    assert_eq!(g.display_text(), "0.004");
}

#[test]
fn external_set_overwrites_pending_edit() {
    let mut f = NumericField::new(1.0, 0.0, 10.0, 1.0);
    f.on_text_change("7");
    f.set_external(3.0);
    assert_eq!(f.value(), 3.0);
    assert_eq!(f.display_text(), "3");
    assert_eq!(f.state(), FieldState::Idle);
}

#[test]
fn slider_updates_value_and_text() {
    let mut f = NumericField::new(900.0, 900.0, 1100.0, 10.0);
    f.on_slider_change(1000.0);
    assert_eq!(f.value(), 1000.0);
    assert_eq!(f.display_text(), "1000");
}

#[test]
fn integer_fields_round_committed_text() {
    let mut f = NumericField::new(4.0, 3.0, 8.0, 1.0).integer();
    f.on_text_change("5.6");
    f.on_commit();
    assert_eq!(f.value(), 6.0);
}

#[test]
fn clamp_is_idempotent() {
    for &v in &[-10.0, 0.0, 0.3, 1.0, 55.0] {
        let once = clamp(v, 0.0, 1.0);
        assert_eq!(clamp(once, 0.0, 1.0), once);
        assert!((0.0..=1.0).contains(&once));
    }
    assert_eq!(clamp(f64::NAN, 2.0, 3.0), 2.0);
}

#[test]
fn k_increments_from_min_land_on_grid() {
    for k in 0..40 {
        let mut f = NumericField::new(0.5, 0.5, 2.0, 0.05);
        for _ in 0..k {
            f.increment();
        }
        let expected = (0.5 + k as f64 * 0.05).min(2.0);
        assert!((f.value() - expected).abs() < 1e-9, "k={k}: {}", f.value());
    }
}
