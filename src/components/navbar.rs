//! Top navigation bar with responsive mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

struct NavLink {
    name: &'static str,
    href: &'static str,
}

const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "Report Case", href: "/report" },
    NavLink { name: "Delayed Cases", href: "/delayed-cases" },
    NavLink { name: "Resources", href: "/resources" },
    NavLink { name: "Contact", href: "/contact" },
];

/// Site navigation: brand, page links, and the login button. A hamburger
/// toggle reveals the same links on small screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    "SafeMinor"
                </A>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.href attr:class="navbar__link">
                                    {link.name}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions">
                    <A href="/login" attr:class="btn btn--primary">
                        "Login"
                    </A>
                </div>

                <button
                    class="navbar__menu-toggle"
                    aria-label="Open main menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <A
                                    href=link.href
                                    attr:class="navbar__mobile-link"
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {link.name}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <A
                        href="/login"
                        attr:class="btn btn--primary navbar__mobile-login"
                        on:click=move |_| menu_open.set(false)
                    >
                        "Login"
                    </A>
                </div>
            </Show>
        </nav>
    }
}
