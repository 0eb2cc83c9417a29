//! Easing Tests
//!
//! Tests for:
//! - Boundary values of every built-in family
//! - Monotonicity of the non-overshooting families
//! - Quadratic in-out reference values
//! - GSAP style name parsing
//! - Parameter and custom curve validation

use lowpoly_city::animation::Easing;
use lowpoly_city::errors::CityError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn builtin() -> Vec<Easing> {
    vec![
        Easing::Linear,
        Easing::PowerIn(2.0),
        Easing::PowerOut(3.0),
        Easing::PowerInOut(2.0),
        Easing::PowerInOut(5.0),
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackIn(1.701_58),
        Easing::BackOut(1.701_58),
        Easing::BackInOut(1.701_58),
    ]
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn every_family_starts_at_zero_and_ends_at_one() {
    for easing in builtin() {
        assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
        assert!(easing.validate().is_ok(), "{easing:?} failed validation");
    }
}

#[test]
fn non_overshooting_families_are_monotonic() {
    let families = [
        Easing::Linear,
        Easing::PowerIn(2.0),
        Easing::PowerOut(2.0),
        Easing::PowerInOut(2.0),
        Easing::PowerInOut(4.0),
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
    ];
    for easing in families {
        let mut previous = easing.apply(0.0);
        for step in 1..=100 {
            let value = easing.apply(step as f32 / 100.0);
            assert!(value + EPSILON >= previous, "{easing:?} decreased at step {step}");
            previous = value;
        }
    }
}

#[test]
fn quad_in_out_reference_values() {
    let ease = Easing::QUAD_IN_OUT;
    assert!(approx(ease.apply(0.25), 0.125));
    assert!(approx(ease.apply(0.5), 0.5));
    assert!(approx(ease.apply(0.75), 0.875));
}

#[test]
fn back_families_leave_unit_range() {
    assert!(Easing::BackIn(1.701_58).apply(0.2) < 0.0);
    assert!(Easing::BackOut(1.701_58).apply(0.8) > 1.0);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_gsap_names() {
    let parse = |s: &str| s.parse::<Easing>().unwrap();

    assert!(matches!(parse("linear"), Easing::Linear));
    assert!(matches!(parse("none"), Easing::Linear));
    assert!(matches!(parse("power1.inOut"), Easing::PowerInOut(p) if p == 2.0));
    assert!(matches!(parse("quad.in"), Easing::PowerIn(p) if p == 2.0));
    assert!(matches!(parse("power2.out"), Easing::PowerOut(p) if p == 3.0));
    assert!(matches!(parse("cubic.inOut"), Easing::PowerInOut(p) if p == 3.0));
    assert!(matches!(parse("sine.inOut"), Easing::SineInOut));
    assert!(matches!(parse("back.in"), Easing::BackIn(s) if s == 1.701_58));
    assert!(matches!(parse("back.out(2.5)"), Easing::BackOut(s) if s == 2.5));
}

#[test]
fn missing_direction_defaults_to_out() {
    assert!(matches!("power3".parse::<Easing>().unwrap(), Easing::PowerOut(p) if p == 4.0));
    assert!(matches!("sine".parse::<Easing>().unwrap(), Easing::SineOut));
}

#[test]
fn unknown_names_are_rejected() {
    for name in ["bounce.out", "power1.sideways", "", "elastic"] {
        let err = name.parse::<Easing>().unwrap_err();
        assert!(matches!(err, CityError::UnknownEasing(ref n) if n == name), "{name}");
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn invalid_parameters_are_reported() {
    assert!(Easing::PowerIn(0.0).validate().is_err());
    assert!(Easing::PowerOut(-1.0).validate().is_err());
    assert!(Easing::PowerInOut(f32::NAN).validate().is_err());
    assert!(Easing::BackOut(-0.5).validate().is_err());
    assert!(Easing::BackIn(f32::INFINITY).validate().is_err());
    assert!(Easing::BackInOut(0.0).validate().is_ok());
}

#[test]
fn custom_curves_must_hit_both_ends() {
    assert!(Easing::Custom(|t| t * t * t).validate().is_ok());
    assert!(Easing::Custom(|t| t * 0.5).validate().is_err());
    assert!(Easing::Custom(|t| t + 0.1).validate().is_err());
    assert!(Easing::Custom(|_| f32::NAN).validate().is_err());
}
