//! Home-page USSD access mockup. Static: the USSD service itself is a
//! separate channel, not implemented here.

use leptos::prelude::*;

const USSD_MENU: [&str; 5] = [
    "1. Report a case",
    "2. Check case status",
    "3. Find help near you",
    "4. Emergency contacts",
    "5. Change language",
];

#[component]
pub fn UssdSection() -> impl IntoView {
    view! {
        <section class="section section--gradient">
            <div class="section__inner ussd">
                <div class="ussd__copy">
                    <h2>"Access SafeMinor Kenya via USSD"</h2>
                    <p>"No internet? No problem. Access our services by dialing:"</p>
                    <div class="ussd__code">
                        <span class="ussd__dial">"*XXX*YYY#"</span>
                        <p>"Available on all major mobile networks in Kenya"</p>
                    </div>
                </div>
                <div class="ussd__phone">
                    <div class="ussd__screen">
                        <div class="ussd__screen-title">"Welcome to SafeMinor Kenya USSD"</div>
                        {USSD_MENU
                            .iter()
                            .map(|item| view! { <div class="ussd__menu-item">{*item}</div> })
                            .collect::<Vec<_>>()}
                        <div class="ussd__prompt">"Reply with number (1-5)"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
