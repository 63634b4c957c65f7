//! Landing page composed of the static home sections.

use leptos::prelude::*;

use crate::components::feature_section::FeatureSection;
use crate::components::hero::Hero;
use crate::components::layout::Layout;
use crate::components::stat_section::StatSection;
use crate::components::ussd_section::UssdSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <Hero/>
            <StatSection/>
            <FeatureSection/>
            <UssdSection/>
        </Layout>
    }
}
