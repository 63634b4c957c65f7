//! Fallback 404 page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::layout::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        log::error!(
            "404: user attempted to access non-existent route: {}",
            location.pathname.get()
        );
    });

    view! {
        <Layout>
            <div class="not-found-page">
                <h1 class="not-found-page__code">"404"</h1>
                <p class="not-found-page__title">"Oops! Page not found"</p>
                <p class="not-found-page__hint">
                    "We couldn't find the page you were looking for. It might have been moved or doesn't exist."
                </p>
                <A href="/" attr:class="btn btn--primary">
                    "Return to Home"
                </A>
            </div>
        </Layout>
    }
}
