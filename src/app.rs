//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::toast_host::ToastHost;
use crate::data::cases::Cases;
use crate::notify::ToastState;
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, delayed_cases::DelayedCasesPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    report::ReportPage, resources::ResourcesPage,
};
use crate::util::language_pref;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared language, toast, and case-store contexts and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let language = RwSignal::new(language_pref::read_preference().unwrap_or_default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(language);
    provide_context(toasts);
    provide_context(Cases::in_memory());

    view! {
        <Stylesheet id="leptos" href="/pkg/safeminor.css"/>
        <Title text="SafeMinor Kenya"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("report") view=ReportPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("delayed-cases") view=DelayedCasesPage/>
                <Route path=StaticSegment("resources") view=ResourcesPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
