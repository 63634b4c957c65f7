//! Role-based login stub. There is no auth backend; submitting only
//! confirms the selected role via the notifier.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::data::roles::{self, ROLES};
use crate::notify::{Notification, Notifier, ToastSink, ToastState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let role_id = RwSignal::new("reporter");
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let role_name = roles::find(role_id.get_untracked()).map_or("user", |role| role.name);
        log::info!("login attempt as {role_name}");
        ToastSink(toasts).notify(Notification::new(
            "Login Successful",
            format!("You've logged in as a {role_name}"),
        ));
    };

    view! {
        <Layout>
            <div class="auth-page">
                <div class="auth-page__card card">
                    <div class="card__header card__header--center">
                        <h1 class="card__title">"Login to SafeMinor Kenya"</h1>
                        <p class="card__subtitle">"Access the system based on your role"</p>
                    </div>

                    <div class="tabs tabs--roles">
                        {ROLES
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
                                .map(|role| format!("{} - Enter your credentials to login.", role.description))
                        }}
                    </p>

                    <form class="form-section" on:submit=on_submit>
                        <label class="form-field">
                            <span>"Email or ID Number"</span>
                            <input
                                class="input"
                                type="text"
                                placeholder="Enter your email or ID"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="form-field">
                            <span>"Password"</span>
                            <input
                                class="input"
                                type="password"
                                placeholder="Enter your password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button type="submit" class="btn btn--primary btn--block">
                            "Login"
                        </button>
                    </form>

                    <div class="card__footer card__footer--stack">
                        <p>
                            "Don't have an account? "
                            <A href="/register">"Register here"</A>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
