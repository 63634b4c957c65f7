//! Landing hero with the primary report call-to-action.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"Protecting Minors from Gender-Based Violence"</h1>
                <p class="hero__subtitle">
                    "Report cases, track their progress, and connect victims with medical, "
                    "legal, and psychosocial support across all 47 counties of Kenya."
                </p>
                <div class="hero__actions">
                    <A href="/report" attr:class="btn btn--primary btn--lg">
                        "Report a Case"
                    </A>
                    <A href="/resources" attr:class="btn btn--lg">
                        "Find Help"
                    </A>
                </div>
            </div>
        </section>
    }
}
