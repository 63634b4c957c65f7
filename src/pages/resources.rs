//! Resources & help: static reference content behind four tabs.

use leptos::prelude::*;

use crate::components::layout::Layout;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ResourceTab {
    Emergency,
    Support,
    Legal,
    Education,
}

const TABS: [(&str, ResourceTab); 4] = [
    ("Emergency Help", ResourceTab::Emergency),
    ("Support Centers", ResourceTab::Support),
    ("Legal Resources", ResourceTab::Legal),
    ("Educational Materials", ResourceTab::Education),
];

struct EmergencyContact {
    name: &'static str,
    number: &'static str,
    availability: &'static str,
}

const EMERGENCY_CONTACTS: [EmergencyContact; 3] = [
    EmergencyContact {
        name: "National Police Service",
        number: "999",
        availability: "Available 24/7",
    },
    EmergencyContact {
        name: "Child Protection Hotline",
        number: "116",
        availability: "Toll-free, 24/7",
    },
    EmergencyContact {
        name: "Gender Violence Helpline",
        number: "1195",
        availability: "Available 24/7",
    },
];

struct SupportCenter {
    name: &'static str,
    description: &'static str,
    address: &'static str,
    phone: &'static str,
}

const SUPPORT_CENTERS: [SupportCenter; 4] = [
    SupportCenter {
        name: "Nairobi Women's Hospital Gender Violence Recovery Center",
        description: "Provides comprehensive medical and psychosocial support to survivors of gender-based violence.",
        address: "Argwings Kodhek Rd, Nairobi",
        phone: "+254 20 2726821",
    },
    SupportCenter {
        name: "COVAW (Coalition on Violence Against Women)",
        description: "Provides legal aid, counseling, and advocacy for survivors of gender-based violence.",
        address: "Valley Arcade, Gitanga Road, Nairobi",
        phone: "+254 20 804 2000",
    },
    SupportCenter {
        name: "GVRC Kenyatta National Hospital",
        description: "Provides medical and psychological support to survivors of sexual and gender-based violence.",
        address: "Hospital Road, Nairobi",
        phone: "+254 20 272 6300",
    },
    SupportCenter {
        name: "Wangu Kanja Foundation",
        description: "Supports survivors of sexual violence and advocates for justice and protection.",
        address: "Karen, Nairobi",
        phone: "+254 722 790 404",
    },
];

const LEGAL_RESOURCES: [(&str, &str); 4] = [
    (
        "Children's Act",
        "The Children's Act provides the legal framework for the care, protection, and maintenance of children in Kenya.",
    ),
    (
        "Sexual Offenses Act",
        "The Sexual Offenses Act defines various sexual offenses and provides for the protection of all persons from harm.",
    ),
    (
        "Prohibition of FGM Act",
        "This act prohibits the practice of female genital mutilation and safeguards against violation of a person's physical integrity.",
    ),
    (
        "Free Legal Aid",
        "Information on how to access free legal representation and advice for gender-based violence cases.",
    ),
];

const EDUCATION_RESOURCES: [(&str, &str); 4] = [
    (
        "Recognizing Signs of Abuse",
        "Learn how to identify the warning signs of various forms of abuse in children and young adults.",
    ),
    (
        "Community Response Guide",
        "A comprehensive guide for communities on how to respond to and prevent gender-based violence.",
    ),
    (
        "School Safety Program",
        "Resources for schools to create safe environments and teach students about personal safety.",
    ),
    (
        "Parent's Guide",
        "Information for parents and guardians on how to protect children and promote healthy relationships.",
    ),
];

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let tab = RwSignal::new(ResourceTab::Emergency);

    view! {
        <Layout>
            <div class="resources-page">
                <div class="resources-page__heading">
                    <h1>"Resources & Help"</h1>
                    <p>"Find support services and information to help victims of gender-based violence"</p>
                </div>

                <div class="tabs">
                    {TABS
                        .iter()
                        .map(|&(label, value)| {
                            let class = move || {
                                if tab.get() == value { "tab tab--active" } else { "tab" }
                            };
                            view! {
                                <button class=class on:click=move |_| tab.set(value)>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || tab.get() == ResourceTab::Emergency>
                    <section class="resources-page__section">
                        <h2>"Emergency Contacts"</h2>
                        <p>"If you or someone you know is in immediate danger, please contact one of these emergency services:"</p>
                        <div class="resource-grid">
                            {EMERGENCY_CONTACTS
                                .iter()
                                .map(|contact| {
                                    view! {
                                        <div class="card resource-card">
                                            <h3>{contact.name}</h3>
                                            <span class="resource-card__number">{contact.number}</span>
                                            <p>{contact.availability}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="notice notice--amber">
                            <p class="notice__title">"SafeMinor USSD Code: *XXX*YYY#"</p>
                            <p>"Access SafeMinor services via USSD for emergency reporting even without internet access."</p>
                        </div>
                    </section>
                </Show>

                <Show when=move || tab.get() == ResourceTab::Support>
                    <section class="resources-page__section">
                        <h2>"Support Centers"</h2>
                        <p>"The following centers offer support services for victims of gender-based violence:"</p>
                        <div class="resource-grid">
                            {SUPPORT_CENTERS
                                .iter()
                                .map(|center| {
                                    view! {
                                        <div class="card resource-card">
                                            <h3>{center.name}</h3>
                                            <p>{center.description}</p>
                                            <p class="resource-card__detail">{center.address}</p>
                                            <p class="resource-card__detail">{center.phone}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </Show>

                <Show when=move || tab.get() == ResourceTab::Legal>
                    <section class="resources-page__section">
                        <h2>"Legal Resources"</h2>
                        <p>"Information about your legal rights and resources available for seeking justice:"</p>
                        <div class="resource-grid">
                            {LEGAL_RESOURCES
                                .iter()
                                .map(|&(name, description)| {
                                    view! {
                                        <div class="card resource-card">
                                            <h3>{name}</h3>
                                            <p>{description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </Show>

                <Show when=move || tab.get() == ResourceTab::Education>
                    <section class="resources-page__section">
                        <h2>"Educational Resources"</h2>
                        <p>"Educational materials about gender-based violence and how to prevent it:"</p>
                        <div class="resource-grid">
                            {EDUCATION_RESOURCES
                                .iter()
                                .map(|&(name, description)| {
                                    view! {
                                        <div class="card resource-card">
                                            <h3>{name}</h3>
                                            <p>{description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </Show>
            </div>
        </Layout>
    }
}
