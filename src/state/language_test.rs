use super::*;

// =============================================================
// Language codes
// =============================================================

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::English);
}

#[test]
fn codes_round_trip() {
    for lang in [Language::English, Language::Swahili] {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(Language::from_code("french"), None);
    assert_eq!(Language::from_code(""), None);
}

// =============================================================
// String tables
// =============================================================

#[test]
fn tables_differ_between_languages() {
    let en = Language::English.strings();
    let sw = Language::Swahili.strings();
    assert_ne!(en.report_title, sw.report_title);
    assert_ne!(en.missing_title, sw.missing_title);
    assert_ne!(en.submitted_title, sw.submitted_title);
    assert_ne!(en.next, sw.next);
}

#[test]
fn tables_have_no_blank_entries() {
    for strings in [Language::English.strings(), Language::Swahili.strings()] {
        assert!(!strings.report_title.is_empty());
        assert!(!strings.victim_name.is_empty());
        assert!(!strings.violence_type.is_empty());
        assert!(!strings.incident_date.is_empty());
        assert!(!strings.contact_phone.is_empty());
        assert!(!strings.missing_description.is_empty());
        assert!(!strings.submitted_description.is_empty());
    }
}
