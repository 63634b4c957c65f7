#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

/// Display language for the report form.
///
/// Language is a process-wide flag, not an i18n framework: it only selects
/// which static string table renders labels, placeholders, and notification
/// messages. It never affects validation rules or draft contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Swahili,
}

impl Language {
    /// Stable short code, used for the `localStorage` preference key.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Swahili => "swahili",
        }
    }

    /// Parse a stored preference code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "english" => Some(Self::English),
            "swahili" => Some(Self::Swahili),
            _ => None,
        }
    }

    /// The string table for this language.
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::English => &EN,
            Self::Swahili => &SW,
        }
    }
}

/// Static string table for one language.
///
/// One field per rendered label; both tables must stay in lockstep.
#[derive(Debug)]
pub struct Strings {
    pub report_title: &'static str,
    pub report_subtitle: &'static str,
    pub card_title: &'static str,
    pub card_subtitle: &'static str,
    pub victim_section: &'static str,
    pub reporter_section: &'static str,

    pub victim_name: &'static str,
    pub victim_age: &'static str,
    pub violence_type: &'static str,
    pub incident_date: &'static str,
    pub county: &'static str,
    pub sub_county: &'static str,
    pub village: &'static str,
    pub details: &'static str,
    pub reporter_name: &'static str,
    pub reporter_age: &'static str,
    pub id_number: &'static str,
    pub relationship: &'static str,
    pub contact_phone: &'static str,

    pub enter_name: &'static str,
    pub enter_age: &'static str,
    pub select_type: &'static str,
    pub select_county: &'static str,
    pub enter_sub_county: &'static str,
    pub enter_village: &'static str,
    pub details_placeholder: &'static str,
    pub enter_your_name: &'static str,
    pub enter_your_age: &'static str,
    pub enter_id: &'static str,
    pub relationship_placeholder: &'static str,
    pub enter_phone: &'static str,

    pub declaration: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    pub submit: &'static str,

    pub missing_title: &'static str,
    pub missing_description: &'static str,
    pub submitted_title: &'static str,
    pub submitted_description: &'static str,
}

static EN: Strings = Strings {
    report_title: "Report a Case",
    report_subtitle: "Fill the form below to report a case of gender-based violence",
    card_title: "Case Information",
    card_subtitle: "All information is kept confidential and secure",
    victim_section: "Victim Information",
    reporter_section: "Reporter Information",

    victim_name: "Victim Name",
    victim_age: "Victim Age",
    violence_type: "Form of Violence",
    incident_date: "Date of Incident",
    county: "County",
    sub_county: "Sub County",
    village: "Village/Estate",
    details: "Details of Incident",
    reporter_name: "Your Name",
    reporter_age: "Your Age",
    id_number: "ID Number",
    relationship: "Relationship to Victim",
    contact_phone: "Contact Phone",

    enter_name: "Enter name",
    enter_age: "Enter age",
    select_type: "Select type",
    select_county: "Select county",
    enter_sub_county: "Enter sub county",
    enter_village: "Enter village or estate",
    details_placeholder: "Provide details about the incident",
    enter_your_name: "Enter your name",
    enter_your_age: "Enter your age",
    enter_id: "Enter your ID number",
    relationship_placeholder: "e.g. Parent, Teacher, Neighbor",
    enter_phone: "Enter phone number",

    declaration: "By submitting this form, you declare that the information provided is true to the best of your knowledge.",
    next: "Next",
    previous: "Previous",
    submit: "Submit Report",

    missing_title: "Missing information",
    missing_description: "Please fill in all required fields",
    submitted_title: "Case reported successfully",
    submitted_description: "Your case has been recorded and relevant authorities have been notified",
};

static SW: Strings = Strings {
    report_title: "Ripoti Kesi",
    report_subtitle: "Jaza fomu hapa chini kuripoti kesi ya ukatili wa kijinsia",
    card_title: "Taarifa za Kesi",
    card_subtitle: "Taarifa zote zinawekwa kwa siri na usalama",
    victim_section: "Taarifa za Mhanga",
    reporter_section: "Taarifa za Mripoti",

    victim_name: "Jina la Mhanga",
    victim_age: "Umri wa Mhanga",
    violence_type: "Aina ya Ukatili",
    incident_date: "Tarehe ya Tukio",
    county: "Kaunti",
    sub_county: "Kaunti Ndogo",
    village: "Kijiji/Mtaa",
    details: "Maelezo ya Tukio",
    reporter_name: "Jina Lako",
    reporter_age: "Umri Wako",
    id_number: "Namba ya Kitambulisho",
    relationship: "Uhusiano na Mhanga",
    contact_phone: "Namba ya Simu",

    enter_name: "Ingiza jina",
    enter_age: "Ingiza umri",
    select_type: "Chagua aina",
    select_county: "Chagua kaunti",
    enter_sub_county: "Ingiza kaunti ndogo",
    enter_village: "Ingiza kijiji au mtaa",
    details_placeholder: "Toa maelezo kuhusu tukio",
    enter_your_name: "Ingiza jina lako",
    enter_your_age: "Ingiza umri wako",
    enter_id: "Ingiza namba ya kitambulisho",
    relationship_placeholder: "k.m. Mzazi, Mwalimu, Jirani",
    enter_phone: "Ingiza namba ya simu",

    declaration: "Kwa kuwasilisha fomu hii, unathibitisha kuwa taarifa zilizotolewa ni za kweli kwa ufahamu wako bora.",
    next: "Endelea",
    previous: "Rudi Nyuma",
    submit: "Wasilisha Ripoti",

    missing_title: "Taarifa zinakosekana",
    missing_description: "Tafadhali jaza sehemu zote zinazohitajika",
    submitted_title: "Kesi imeripotiwa kwa mafanikio",
    submitted_description: "Kesi yako imeripotiwa na mamlaka husika zimefahamishwa",
};
