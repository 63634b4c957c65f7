//! Registration stub with the original client-side field rules.
//!
//! Validation lives in `state::register`; this page collects input,
//! renders per-field messages, and confirms via the notifier. Nothing is
//! persisted.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::data::roles::{self, registration_roles};
use crate::notify::{Notification, Notifier, ToastSink, ToastState};
use crate::state::register::{FieldError, RegisterField, RegistrationForm};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let role_id = RwSignal::new("reporter");
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let message_for = move |field: RegisterField| {
        errors.with(|errors| RegistrationForm::message_for(errors, field))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let role_name = roles::find(role_id.get_untracked()).map_or("user", |role| role.name);
        log::info!("registration attempt as {role_name}");
        ToastSink(toasts).notify(Notification::new(
            "Registration Successful",
            format!("You've registered as a {role_name}"),
        ));
        form.set(RegistrationForm::default());
        errors.set(Vec::new());
    };

    let text_field = move |label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str,
                           field: RegisterField,
                           read: fn(&RegistrationForm) -> String,
                           write: fn(&mut RegistrationForm, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    class="input"
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || form.with(read)
                    on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
                />
                {move || {
                    message_for(field)
                        .map(|message| view! { <span class="form-field__error">{message}</span> })
                }}
            </label>
        }
    };

    view! {
        <Layout>
            <div class="auth-page">
                <div class="auth-page__card card">
                    <div class="card__header card__header--center">
                        <h1 class="card__title">"Create an Account"</h1>
                        <p class="card__subtitle">"Register to access SafeMinor Kenya services"</p>
                    </div>

                    <div class="tabs tabs--roles">
                        {registration_roles()
                            .iter()
                            .map(|role| {
                                let id = role.id;
                                let class = move || {
                                    if role_id.get() == id { "tab tab--active" } else { "tab" }
                                };
                                view! {
                                    <button class=class on:click=move |_| role_id.set(id)>
                                        {role.name}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="auth-page__role-hint">
                        {move || {
                            roles::find(role_id.get())
                                .map(|role| format!("{} - Please provide your details to register.", role.description))
                        }}
                    </p>

                    <form class="form-section" on:submit=on_submit>
                        {text_field(
                            "Full Name",
                            "text",
                            "Enter your full name",
                            RegisterField::FullName,
                            |f| f.full_name.clone(),
                            |f, v| f.full_name = v,
                        )}
                        {text_field(
                            "Email",
                            "email",
                            "Enter your email",
                            RegisterField::Email,
                            |f| f.email.clone(),
                            |f, v| f.email = v,
                        )}
                        {text_field(
                            "ID Number",
                            "text",
                            "Enter your ID number",
                            RegisterField::IdNumber,
                            |f| f.id_number.clone(),
                            |f, v| f.id_number = v,
                        )}
                        {text_field(
                            "Phone Number",
                            "tel",
                            "Enter your phone number",
                            RegisterField::PhoneNumber,
                            |f| f.phone_number.clone(),
                            |f, v| f.phone_number = v,
                        )}
                        {text_field(
                            "Password",
                            "password",
                            "Create a password",
                            RegisterField::Password,
                            |f| f.password.clone(),
                            |f, v| f.password = v,
                        )}
                        {text_field(
                            "Confirm Password",
                            "password",
                            "Confirm your password",
                            RegisterField::ConfirmPassword,
                            |f| f.confirm_password.clone(),
                            |f, v| f.confirm_password = v,
                        )}

                        <button type="submit" class="btn btn--primary btn--block">
                            "Register"
                        </button>
                    </form>

                    <div class="card__footer card__footer--stack">
                        <p>
                            "Already have an account? "
                            <A href="/login">"Login here"</A>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
