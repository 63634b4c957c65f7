#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Field keys for registration validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    FullName,
    Email,
    IdNumber,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

/// A per-field validation failure with its display message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: RegisterField,
    pub message: &'static str,
}

/// The registration form. Validation runs only on submit; failures are
/// rendered inline next to their field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub id_number: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check every field, returning all failures at once so the form can
    /// show them together. Empty result means the form is acceptable.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.full_name.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: RegisterField::FullName,
                message: "Full name must be at least 2 characters.",
            });
        }

        if !looks_like_email(&self.email) {
            errors.push(FieldError {
                field: RegisterField::Email,
                message: "Please enter a valid email address.",
            });
        }

        if self.id_number.trim().chars().count() < 5 {
            errors.push(FieldError {
                field: RegisterField::IdNumber,
                message: "ID number must be at least 5 characters.",
            });
        }

        if self.phone_number.trim().chars().count() < 10 {
            errors.push(FieldError {
                field: RegisterField::PhoneNumber,
                message: "Phone number must be at least 10 characters.",
            });
        }

        if self.password.chars().count() < 8 {
            errors.push(FieldError {
                field: RegisterField::Password,
                message: "Password must be at least 8 characters.",
            });
        } else if self.password != self.confirm_password {
            errors.push(FieldError {
                field: RegisterField::ConfirmPassword,
                message: "Passwords don't match",
            });
        }

        errors
    }

    /// The message for one field from a prior `validate` run, if any.
    pub fn message_for(errors: &[FieldError], field: RegisterField) -> Option<&'static str> {
        errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message)
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dot in
/// the domain. Real address verification is the backend's job.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
