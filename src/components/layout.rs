//! Page chrome: navbar above, footer below.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Wraps page content with the shared navigation and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">
                <div class="layout__footer-inner">
                    <span>"SafeMinor Kenya"</span>
                    <span>"Gender Violence Helpline: 1195"</span>
                </div>
            </footer>
        </div>
    }
}
