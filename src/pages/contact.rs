//! Contact page with office details and a message form.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::notify::{Notification, Notifier, ToastSink, ToastState};

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted: {}", subject.get_untracked());
        ToastSink(toasts).notify(Notification::new(
            "Message Sent",
            "We have received your message and will respond shortly.",
        ));
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    view! {
        <Layout>
            <div class="contact-page">
                <div class="contact-page__heading">
                    <h1>"Contact Us"</h1>
                    <p>"Get in touch with our team for support, questions, or partnerships"</p>
                </div>

                <div class="contact-page__grid">
                    <div class="contact-page__info">
                        <div class="card contact-card">
                            <h3>"Phone"</h3>
                            <p>"Call our support line for assistance"</p>
                            <span class="contact-card__value">"1195"</span>
                        </div>
                        <div class="card contact-card">
                            <h3>"Email"</h3>
                            <p>"Send us an email anytime"</p>
                            <span class="contact-card__value">"support@safeminorkenya.org"</span>
                        </div>
                        <div class="card contact-card">
                            <h3>"Office"</h3>
                            <p>"Visit our headquarters"</p>
                            <address class="contact-card__value">
                                "Stima Plaza, Moi Avenue, Nairobi, Kenya"
                            </address>
                        </div>
                    </div>

                    <div class="card contact-page__form">
                        <div class="card__header">
                            <h2 class="card__title">"Send us a message"</h2>
                            <p class="card__subtitle">
                                "Fill out the form below and we'll get back to you as soon as possible."
                            </p>
                        </div>

                        <form class="form-section" on:submit=on_submit>
                            <div class="form-row">
                                <label class="form-field">
                                    <span>"Your Name"</span>
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Enter your name"
                                        required
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    <span>"Your Email"</span>
                                    <input
                                        class="input"
                                        type="email"
                                        placeholder="Enter your email"
                                        required
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>

                            <label class="form-field">
                                <span>"Subject"</span>
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="What is your message about?"
                                    required
                                    prop:value=move || subject.get()
                                    on:input=move |ev| subject.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="form-field">
                                <span>"Message"</span>
                                <textarea
                                    class="input"
                                    rows="6"
                                    placeholder="Type your message here..."
                                    required
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                            </label>

                            <button type="submit" class="btn btn--primary btn--block">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
