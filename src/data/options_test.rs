use super::*;

// =============================================================
// Violence types
// =============================================================

#[test]
fn violence_types_are_unique() {
    for (i, a) in VIOLENCE_TYPES.iter().enumerate() {
        for b in &VIOLENCE_TYPES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn violence_types_include_core_forms() {
    assert!(VIOLENCE_TYPES.contains(&"FGM"));
    assert!(VIOLENCE_TYPES.contains(&"Child Marriage"));
    assert!(VIOLENCE_TYPES.contains(&"Other"));
}

// =============================================================
// Counties
// =============================================================

#[test]
fn counties_are_unique() {
    for (i, a) in COUNTIES.iter().enumerate() {
        for b in &COUNTIES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn counties_are_alphabetical() {
    for pair in COUNTIES.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
}

#[test]
fn counties_have_no_blanks() {
    assert!(COUNTIES.iter().all(|c| !c.trim().is_empty()));
}
