//! Home-page section describing how the platform works.

use leptos::prelude::*;

struct Feature {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        name: "Easy Reporting",
        description: "Report cases through our mobile app or USSD for areas with limited internet access.",
        icon: "feature__icon--report",
    },
    Feature {
        name: "Case Tracking",
        description: "Monitor the progress of reported cases from initial report to resolution.",
        icon: "feature__icon--track",
    },
    Feature {
        name: "Stakeholder Notifications",
        description: "Automatic alerts to police officers and medical professionals when cases are reported.",
        icon: "feature__icon--notify",
    },
    Feature {
        name: "Support Network",
        description: "Connect victims with professional psychologists and support groups.",
        icon: "feature__icon--support",
    },
];

#[component]
pub fn FeatureSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"How SafeMinor Kenya Works"</h2>
                    <p>"Our platform connects victims, reporters, medical professionals, and law enforcement."</p>
                </div>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <div class=format!("feature__icon {}", feature.icon)></div>
                                    <h3 class="feature__name">{feature.name}</h3>
                                    <p class="feature__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
