use super::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        full_name: "Amina Otieno".to_owned(),
        email: "amina@example.org".to_owned(),
        id_number: "12345678".to_owned(),
        phone_number: "0712345678".to_owned(),
        password: "correct horse".to_owned(),
        confirm_password: "correct horse".to_owned(),
    }
}

// =============================================================
// Whole-form outcomes
// =============================================================

#[test]
fn valid_form_passes() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn empty_form_fails_every_field() {
    let errors = RegistrationForm::default().validate();
    assert_eq!(errors.len(), 5);
}

// =============================================================
// Individual rules
// =============================================================

#[test]
fn short_full_name_is_rejected() {
    let form = RegistrationForm {
        full_name: "A".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert_eq!(
        RegistrationForm::message_for(&errors, RegisterField::FullName),
        Some("Full name must be at least 2 characters.")
    );
}

#[test]
fn whitespace_only_name_is_rejected() {
    let form = RegistrationForm {
        full_name: "   ".to_owned(),
        ..valid_form()
    };
    assert!(!form.validate().is_empty());
}

#[test]
fn malformed_emails_are_rejected() {
    for bad in ["", "amina", "amina@", "@example.org", "amina@org", "amina@example."] {
        let form = RegistrationForm {
            email: bad.to_owned(),
            ..valid_form()
        };
        let errors = form.validate();
        assert!(
            RegistrationForm::message_for(&errors, RegisterField::Email).is_some(),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn short_id_number_is_rejected() {
    let form = RegistrationForm {
        id_number: "1234".to_owned(),
        ..valid_form()
    };
    assert!(!form.validate().is_empty());
}

#[test]
fn short_phone_number_is_rejected() {
    let form = RegistrationForm {
        phone_number: "071234".to_owned(),
        ..valid_form()
    };
    assert!(!form.validate().is_empty());
}

#[test]
fn short_password_is_rejected_before_match_check() {
    let form = RegistrationForm {
        password: "short".to_owned(),
        confirm_password: "different".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert!(RegistrationForm::message_for(&errors, RegisterField::Password).is_some());
    assert!(RegistrationForm::message_for(&errors, RegisterField::ConfirmPassword).is_none());
}

#[test]
fn mismatched_passwords_are_rejected() {
    let form = RegistrationForm {
        confirm_password: "something else".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert_eq!(
        RegistrationForm::message_for(&errors, RegisterField::ConfirmPassword),
        Some("Passwords don't match")
    );
}
