#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::Serialize;

use crate::data::cases::CaseStore;
use crate::notify::{Notification, Notifier};
use crate::state::language::Strings;

/// The step currently shown by the report wizard. Exactly one is active;
/// submission resets straight back to `VictimInfo`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    VictimInfo,
    ReporterInfo,
}

/// Field keys for the merge-style update operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportField {
    VictimName,
    VictimAge,
    ViolenceType,
    IncidentDate,
    County,
    SubCounty,
    Village,
    Details,
    ReporterName,
    ReporterAge,
    ReporterId,
    Relationship,
    ContactPhone,
}

impl ReportField {
    /// Wire key used when the draft is serialized for submission.
    pub const fn key(self) -> &'static str {
        match self {
            Self::VictimName => "victimName",
            Self::VictimAge => "victimAge",
            Self::ViolenceType => "violenceType",
            Self::IncidentDate => "date",
            Self::County => "county",
            Self::SubCounty => "subCounty",
            Self::Village => "village",
            Self::Details => "details",
            Self::ReporterName => "reporterName",
            Self::ReporterAge => "reporterAge",
            Self::ReporterId => "reporterID",
            Self::Relationship => "relationship",
            Self::ContactPhone => "contactPhone",
        }
    }
}

/// Fields that must be present before leaving the victim-info step.
const STEP_ONE_REQUIRED: [ReportField; 4] = [
    ReportField::VictimName,
    ReportField::VictimAge,
    ReportField::ViolenceType,
    ReportField::IncidentDate,
];

/// The in-progress case report. All fields are form values; nothing is
/// validated eagerly, only at the `next` transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub victim_name: String,
    pub victim_age: String,
    pub violence_type: String,
    #[serde(rename = "date")]
    pub incident_date: String,
    pub county: String,
    pub sub_county: String,
    pub village: String,
    pub details: String,
    pub reporter_name: String,
    pub reporter_age: String,
    #[serde(rename = "reporterID")]
    pub reporter_id: String,
    pub relationship: String,
    pub contact_phone: String,
}

impl ReportDraft {
    pub fn get(&self, field: ReportField) -> &str {
        match field {
            ReportField::VictimName => &self.victim_name,
            ReportField::VictimAge => &self.victim_age,
            ReportField::ViolenceType => &self.violence_type,
            ReportField::IncidentDate => &self.incident_date,
            ReportField::County => &self.county,
            ReportField::SubCounty => &self.sub_county,
            ReportField::Village => &self.village,
            ReportField::Details => &self.details,
            ReportField::ReporterName => &self.reporter_name,
            ReportField::ReporterAge => &self.reporter_age,
            ReportField::ReporterId => &self.reporter_id,
            ReportField::Relationship => &self.relationship,
            ReportField::ContactPhone => &self.contact_phone,
        }
    }

    /// Merge a value into the draft at `field`, leaving every other
    /// field untouched.
    pub fn set(&mut self, field: ReportField, value: String) {
        let slot = match field {
            ReportField::VictimName => &mut self.victim_name,
            ReportField::VictimAge => &mut self.victim_age,
            ReportField::ViolenceType => &mut self.violence_type,
            ReportField::IncidentDate => &mut self.incident_date,
            ReportField::County => &mut self.county,
            ReportField::SubCounty => &mut self.sub_county,
            ReportField::Village => &mut self.village,
            ReportField::Details => &mut self.details,
            ReportField::ReporterName => &mut self.reporter_name,
            ReportField::ReporterAge => &mut self.reporter_age,
            ReportField::ReporterId => &mut self.reporter_id,
            ReportField::Relationship => &mut self.relationship,
            ReportField::ContactPhone => &mut self.contact_phone,
        };
        *slot = value;
    }

    /// Required victim-step fields that are still blank.
    pub fn missing_step_one(&self) -> Vec<ReportField> {
        STEP_ONE_REQUIRED
            .into_iter()
            .filter(|&field| self.get(field).is_empty())
            .collect()
    }
}

/// Raised when advancing from the victim step with required fields blank.
/// Non-fatal: the caller surfaces it as a notification and the user can
/// fill the fields and retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} required field(s) missing", missing.len())]
pub struct IncompleteStep {
    pub missing: Vec<ReportField>,
}

/// The two-step case-report wizard.
///
/// Owns the draft exclusively; every transition is synchronous. The only
/// failure is the step-one completeness check, re-evaluated on every
/// `next` attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportWizard {
    pub step: WizardStep,
    pub draft: ReportDraft,
}

impl ReportWizard {
    /// Field update: merge `value` into the draft. No eager validation.
    pub fn set_field(&mut self, field: ReportField, value: String) {
        self.draft.set(field, value);
    }

    /// Guarded advance to the reporter step.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteStep` if any required victim field is blank;
    /// the draft and step are left unchanged.
    pub fn next(&mut self) -> Result<(), IncompleteStep> {
        if self.step == WizardStep::VictimInfo {
            let missing = self.draft.missing_step_one();
            if !missing.is_empty() {
                return Err(IncompleteStep { missing });
            }
        }
        self.step = WizardStep::ReporterInfo;
        Ok(())
    }

    /// Unconditional return to the victim step. No data loss.
    pub fn previous(&mut self) {
        self.step = WizardStep::VictimInfo;
    }

    /// Take the completed draft and reset to an empty victim step.
    ///
    /// Only reachable from the reporter step; returns `None` otherwise.
    /// The reporter fields are marked required in the UI but submission
    /// does not gate on them; that asymmetry matches the deployed intake
    /// flow and is preserved deliberately (see DESIGN.md).
    pub fn submit(&mut self) -> Option<ReportDraft> {
        if self.step != WizardStep::ReporterInfo {
            return None;
        }
        self.step = WizardStep::VictimInfo;
        Some(std::mem::take(&mut self.draft))
    }

    /// Driver for the Next button: advance or surface the completeness
    /// failure through `notifier`. Returns whether the step changed.
    pub fn advance(&mut self, notifier: &dyn Notifier, strings: &Strings) -> bool {
        match self.next() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("report wizard blocked: {err}");
                notifier.notify(Notification::destructive(
                    strings.missing_title,
                    strings.missing_description,
                ));
                false
            }
        }
    }

    /// Driver for the Submit button: hand the report to the store, emit
    /// the success notification, and reset. Returns whether a report was
    /// actually submitted.
    pub fn finish(
        &mut self,
        store: &dyn CaseStore,
        notifier: &dyn Notifier,
        strings: &Strings,
    ) -> bool {
        let Some(report) = self.submit() else {
            return false;
        };
        store.submit_case(report);
        notifier.notify(Notification::new(
            strings.submitted_title,
            strings.submitted_description,
        ));
        true
    }
}
