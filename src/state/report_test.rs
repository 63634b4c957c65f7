use std::cell::RefCell;

use super::*;
use crate::data::cases::{CaseRecord, CaseSummary, ChartPoint, DelayedCase};
use crate::notify::Severity;
use crate::state::language::Language;

/// Records every notification instead of rendering it.
#[derive(Default)]
struct RecordingNotifier {
    notes: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, note: Notification) {
        self.notes.borrow_mut().push(note);
    }
}

/// Records submitted reports; every query returns nothing.
#[derive(Default)]
struct RecordingStore {
    submitted: RefCell<Vec<ReportDraft>>,
}

impl CaseStore for RecordingStore {
    fn fetch_cases(&self) -> Vec<CaseRecord> {
        Vec::new()
    }

    fn delayed_cases(&self) -> Vec<DelayedCase> {
        Vec::new()
    }

    fn summary(&self) -> CaseSummary {
        CaseSummary {
            total: 0,
            active: 0,
            resolved: 0,
            resolution_rate: 0,
        }
    }

    fn county_totals(&self) -> Vec<ChartPoint> {
        Vec::new()
    }

    fn type_totals(&self) -> Vec<ChartPoint> {
        Vec::new()
    }

    fn submit_case(&self, report: ReportDraft) {
        self.submitted.borrow_mut().push(report);
    }
}

fn complete_step_one() -> ReportWizard {
    let mut wizard = ReportWizard::default();
    wizard.set_field(ReportField::VictimName, "Jane".to_owned());
    wizard.set_field(ReportField::VictimAge, "10".to_owned());
    wizard.set_field(ReportField::ViolenceType, "FGM".to_owned());
    wizard.set_field(ReportField::IncidentDate, "2025-02-10".to_owned());
    wizard
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn set_field_touches_only_that_field() {
    let mut wizard = ReportWizard::default();
    wizard.set_field(ReportField::County, "Narok".to_owned());
    assert_eq!(wizard.draft.county, "Narok");
    let expected = ReportDraft {
        county: "Narok".to_owned(),
        ..ReportDraft::default()
    };
    assert_eq!(wizard.draft, expected);
}

#[test]
fn set_field_overwrites_previous_value() {
    let mut wizard = ReportWizard::default();
    wizard.set_field(ReportField::VictimName, "Jane".to_owned());
    wizard.set_field(ReportField::VictimName, "Joan".to_owned());
    assert_eq!(wizard.draft.victim_name, "Joan");
}

#[test]
fn every_field_key_round_trips_through_get() {
    let fields = [
        ReportField::VictimName,
        ReportField::VictimAge,
        ReportField::ViolenceType,
        ReportField::IncidentDate,
        ReportField::County,
        ReportField::SubCounty,
        ReportField::Village,
        ReportField::Details,
        ReportField::ReporterName,
        ReportField::ReporterAge,
        ReportField::ReporterId,
        ReportField::Relationship,
        ReportField::ContactPhone,
    ];
    let mut draft = ReportDraft::default();
    for field in fields {
        draft.set(field, field.key().to_owned());
    }
    for field in fields {
        assert_eq!(draft.get(field), field.key());
    }
}

// =============================================================
// Next: step-one gating
// =============================================================

#[test]
fn next_fails_on_an_empty_draft() {
    let mut wizard = ReportWizard::default();
    let err = wizard.next().unwrap_err();
    assert_eq!(err.missing.len(), 4);
    assert_eq!(wizard.step, WizardStep::VictimInfo);
    assert_eq!(wizard.draft, ReportDraft::default());
}

#[test]
fn next_fails_when_any_single_required_field_is_blank() {
    for blanked in [
        ReportField::VictimName,
        ReportField::VictimAge,
        ReportField::ViolenceType,
        ReportField::IncidentDate,
    ] {
        let mut wizard = complete_step_one();
        wizard.set_field(blanked, String::new());
        let before = wizard.draft.clone();

        let err = wizard.next().unwrap_err();
        assert_eq!(err.missing, vec![blanked]);
        assert_eq!(wizard.step, WizardStep::VictimInfo);
        assert_eq!(wizard.draft, before, "failed next must not mutate the draft");
    }
}

#[test]
fn next_ignores_optional_fields() {
    // County, sub-county, village, and details are not gated.
    let mut wizard = complete_step_one();
    assert!(wizard.next().is_ok());
    assert_eq!(wizard.step, WizardStep::ReporterInfo);
}

#[test]
fn next_preserves_every_entered_field() {
    let mut wizard = complete_step_one();
    wizard.set_field(ReportField::SubCounty, "Narok North".to_owned());
    wizard.set_field(ReportField::Details, "reported by teacher".to_owned());
    let before = wizard.draft.clone();

    wizard.next().expect("complete step one advances");
    assert_eq!(wizard.draft, before);
}

#[test]
fn next_is_reevaluated_on_every_attempt() {
    let mut wizard = ReportWizard::default();
    assert!(wizard.next().is_err());

    wizard.set_field(ReportField::VictimName, "Jane".to_owned());
    wizard.set_field(ReportField::VictimAge, "10".to_owned());
    assert!(wizard.next().is_err());

    wizard.set_field(ReportField::ViolenceType, "FGM".to_owned());
    wizard.set_field(ReportField::IncidentDate, "2025-02-10".to_owned());
    assert!(wizard.next().is_ok());
}

// =============================================================
// Previous
// =============================================================

#[test]
fn previous_round_trips_without_data_loss() {
    let mut wizard = complete_step_one();
    wizard.next().expect("advances");
    let at_step_two = wizard.clone();

    wizard.previous();
    assert_eq!(wizard.step, WizardStep::VictimInfo);
    assert_eq!(wizard.draft, at_step_two.draft);

    wizard.next().expect("advances again");
    assert_eq!(wizard, at_step_two);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_from_reporter_step_resets_to_an_empty_draft() {
    let mut wizard = complete_step_one();
    wizard.next().expect("advances");
    wizard.set_field(ReportField::ReporterName, "Amina".to_owned());

    let report = wizard.submit().expect("submit succeeds from step two");
    assert_eq!(report.victim_name, "Jane");
    assert_eq!(report.reporter_name, "Amina");
    assert_eq!(wizard, ReportWizard::default());
}

#[test]
fn submit_succeeds_without_reporter_fields() {
    // Reporter fields are marked required in the UI but not gated.
    let mut wizard = complete_step_one();
    wizard.next().expect("advances");

    let report = wizard.submit().expect("no step-two gate");
    assert!(report.reporter_name.is_empty());
    assert_eq!(wizard.step, WizardStep::VictimInfo);
}

#[test]
fn submit_is_unreachable_from_the_victim_step() {
    let mut wizard = complete_step_one();
    assert!(wizard.submit().is_none());
    assert_eq!(wizard.step, WizardStep::VictimInfo);
    assert_eq!(wizard.draft, complete_step_one().draft);
}

// =============================================================
// Language independence
// =============================================================

#[test]
fn language_only_selects_notification_text() {
    let mut english = ReportWizard::default();
    let mut swahili = ReportWizard::default();
    let en_notes = RecordingNotifier::default();
    let sw_notes = RecordingNotifier::default();

    assert!(!english.advance(&en_notes, Language::English.strings()));
    assert!(!swahili.advance(&sw_notes, Language::Swahili.strings()));

    // Same transition outcome and draft either way; only text differs.
    assert_eq!(english, swahili);
    let en = en_notes.notes.borrow();
    let sw = sw_notes.notes.borrow();
    assert_ne!(en[0].title, sw[0].title);
    assert_eq!(en[0].severity, Severity::Destructive);
    assert_eq!(sw[0].severity, Severity::Destructive);
}

// =============================================================
// Drivers (notifier + store wiring)
// =============================================================

#[test]
fn advance_notifies_destructively_on_failure() {
    let mut wizard = ReportWizard::default();
    let notes = RecordingNotifier::default();

    assert!(!wizard.advance(&notes, Language::English.strings()));
    let notes = notes.notes.borrow();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Missing information");
    assert_eq!(notes[0].severity, Severity::Destructive);
}

#[test]
fn advance_is_silent_on_success() {
    let mut wizard = complete_step_one();
    let notes = RecordingNotifier::default();

    assert!(wizard.advance(&notes, Language::English.strings()));
    assert!(notes.notes.borrow().is_empty());
}

#[test]
fn finish_from_victim_step_does_nothing() {
    let mut wizard = complete_step_one();
    let notes = RecordingNotifier::default();
    let store = RecordingStore::default();

    assert!(!wizard.finish(&store, &notes, Language::English.strings()));
    assert!(notes.notes.borrow().is_empty());
    assert!(store.submitted.borrow().is_empty());
}

#[test]
fn full_scenario_jane_fgm_narok() {
    let mut wizard = ReportWizard::default();
    let notes = RecordingNotifier::default();
    let store = RecordingStore::default();

    wizard.set_field(ReportField::VictimName, "Jane".to_owned());
    wizard.set_field(ReportField::VictimAge, "10".to_owned());
    wizard.set_field(ReportField::ViolenceType, "FGM".to_owned());
    wizard.set_field(ReportField::IncidentDate, "2025-02-10".to_owned());
    wizard.set_field(ReportField::County, "Narok".to_owned());

    assert!(wizard.advance(&notes, Language::English.strings()));
    assert_eq!(wizard.step, WizardStep::ReporterInfo);

    // Submit without any reporter fields still succeeds.
    assert!(wizard.finish(&store, &notes, Language::English.strings()));
    assert_eq!(wizard, ReportWizard::default());

    let submitted = store.submitted.borrow();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].county, "Narok");

    let notes = notes.notes.borrow();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Case reported successfully");
    assert_eq!(notes[0].severity, Severity::Default);
}
