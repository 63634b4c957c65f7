//! Case-report page hosting the two-step wizard.
//!
//! The wizard itself (`state::report`) owns all sequencing and validation;
//! this page only binds form controls to the draft and routes button
//! presses through the toast notifier and the case store.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::data::cases::Cases;
use crate::data::options::{COUNTIES, VIOLENCE_TYPES};
use crate::notify::{ToastSink, ToastState};
use crate::state::language::Language;
use crate::state::report::{ReportField, ReportWizard, WizardStep};
use crate::util::language_pref;

const fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

/// Two-step case-report wizard with a bilingual label toggle.
#[component]
pub fn ReportPage() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cases = expect_context::<Cases>();

    let wizard = RwSignal::new(ReportWizard::default());

    let strings = move || language.get().strings();
    let step = move || wizard.with(|w| w.step);

    let select_language = move |lang: Language| {
        language.set(lang);
        language_pref::store(lang);
    };

    let field_value = move |field: ReportField| wizard.with(|w| w.draft.get(field).to_owned());
    let on_field = move |field: ReportField| {
        move |ev: leptos::ev::Event| {
            wizard.update(|w| w.set_field(field, event_target_value(&ev)));
        }
    };

    let on_next = move |_| {
        wizard.update(|w| {
            w.advance(&ToastSink(toasts), language.get_untracked().strings());
        });
    };

    let on_previous = move |_| wizard.update(ReportWizard::previous);

    // StoredValue keeps the handler `Copy` so `Show` can re-render it.
    let store = StoredValue::new(cases.0.clone());
    let on_submit = move |_| {
        wizard.update(|w| {
            store.with_value(|s| {
                w.finish(s.as_ref(), &ToastSink(toasts), language.get_untracked().strings());
            });
        });
    };

    view! {
        <Layout>
            <div class="report-page">
                <div class="report-page__heading">
                    <h1>{move || strings().report_title}</h1>
                    <p>{move || strings().report_subtitle}</p>
                </div>

                <div class="tabs tabs--language">
                    <button
                        class=move || tab_class(language.get() == Language::English)
                        on:click=move |_| select_language(Language::English)
                    >
                        "English"
                    </button>
                    <button
                        class=move || tab_class(language.get() == Language::Swahili)
                        on:click=move |_| select_language(Language::Swahili)
                    >
                        "Kiswahili"
                    </button>
                </div>

                <div class="card report-card">
                    <div class="card__header">
                        <h2 class="card__title">{move || strings().card_title}</h2>
                        <p class="card__subtitle">{move || strings().card_subtitle}</p>
                    </div>

                    <div class="card__content">
                        <Show when=move || step() == WizardStep::VictimInfo>
                            <div class="form-section">
                                <h3>{move || strings().victim_section}</h3>

                                <div class="form-row">
                                    <label class="form-field">
                                        <span>{move || strings().victim_name} " *"</span>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder=move || strings().enter_name
                                            prop:value=move || field_value(ReportField::VictimName)
                                            on:input=on_field(ReportField::VictimName)
                                        />
                                    </label>
                                    <label class="form-field">
                                        <span>{move || strings().victim_age} " *"</span>
                                        <input
                                            class="input"
                                            type="number"
                                            min="0"
                                            max="18"
                                            placeholder=move || strings().enter_age
                                            prop:value=move || field_value(ReportField::VictimAge)
                                            on:input=on_field(ReportField::VictimAge)
                                        />
                                    </label>
                                </div>

                                <label class="form-field">
                                    <span>{move || strings().violence_type} " *"</span>
                                    <select
                                        class="input"
                                        prop:value=move || field_value(ReportField::ViolenceType)
                                        on:change=on_field(ReportField::ViolenceType)
                                    >
                                        <option value="">{move || strings().select_type}</option>
                                        {VIOLENCE_TYPES
                                            .iter()
                                            .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>

                                <label class="form-field">
                                    <span>{move || strings().incident_date} " *"</span>
                                    <input
                                        class="input"
                                        type="date"
                                        prop:value=move || field_value(ReportField::IncidentDate)
                                        on:input=on_field(ReportField::IncidentDate)
                                    />
                                </label>

                                <label class="form-field">
                                    <span>{move || strings().county}</span>
                                    <select
                                        class="input"
                                        prop:value=move || field_value(ReportField::County)
                                        on:change=on_field(ReportField::County)
                                    >
                                        <option value="">{move || strings().select_county}</option>
                                        {COUNTIES
                                            .iter()
                                            .map(|county| view! { <option value=*county>{*county}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>

                                <div class="form-row">
                                    <label class="form-field">
                                        <span>{move || strings().sub_county}</span>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder=move || strings().enter_sub_county
                                            prop:value=move || field_value(ReportField::SubCounty)
                                            on:input=on_field(ReportField::SubCounty)
                                        />
                                    </label>
                                    <label class="form-field">
                                        <span>{move || strings().village}</span>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder=move || strings().enter_village
                                            prop:value=move || field_value(ReportField::Village)
                                            on:input=on_field(ReportField::Village)
                                        />
                                    </label>
                                </div>

                                <label class="form-field">
                                    <span>{move || strings().details}</span>
                                    <textarea
                                        class="input"
                                        rows="4"
                                        placeholder=move || strings().details_placeholder
                                        prop:value=move || field_value(ReportField::Details)
                                        on:input=on_field(ReportField::Details)
                                    ></textarea>
                                </label>
                            </div>
                        </Show>

                        <Show when=move || step() == WizardStep::ReporterInfo>
                            <div class="form-section">
                                <h3>{move || strings().reporter_section}</h3>

                                <div class="form-row">
                                    <label class="form-field">
                                        <span>{move || strings().reporter_name} " *"</span>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder=move || strings().enter_your_name
                                            prop:value=move || field_value(ReportField::ReporterName)
                                            on:input=on_field(ReportField::ReporterName)
                                        />
                                    </label>
                                    <label class="form-field">
                                        <span>{move || strings().reporter_age} " *"</span>
                                        <input
                                            class="input"
                                            type="number"
                                            min="18"
                                            placeholder=move || strings().enter_your_age
                                            prop:value=move || field_value(ReportField::ReporterAge)
                                            on:input=on_field(ReportField::ReporterAge)
                                        />
                                    </label>
                                </div>

                                <label class="form-field">
                                    <span>{move || strings().id_number} " *"</span>
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder=move || strings().enter_id
                                        prop:value=move || field_value(ReportField::ReporterId)
                                        on:input=on_field(ReportField::ReporterId)
                                    />
                                </label>

                                <label class="form-field">
                                    <span>{move || strings().relationship} " *"</span>
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder=move || strings().relationship_placeholder
                                        prop:value=move || field_value(ReportField::Relationship)
                                        on:input=on_field(ReportField::Relationship)
                                    />
                                </label>

                                <label class="form-field">
                                    <span>{move || strings().contact_phone} " *"</span>
                                    <input
                                        class="input"
                                        type="tel"
                                        placeholder=move || strings().enter_phone
                                        prop:value=move || field_value(ReportField::ContactPhone)
                                        on:input=on_field(ReportField::ContactPhone)
                                    />
                                </label>

                                <div class="notice notice--amber">
                                    <p>{move || strings().declaration}</p>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="card__footer report-card__footer">
                        <Show when=move || step() == WizardStep::ReporterInfo>
                            <button class="btn" on:click=on_previous>
                                {move || strings().previous}
                            </button>
                        </Show>

                        <span class="report-card__spacer"></span>

                        <Show
                            when=move || step() == WizardStep::VictimInfo
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" on:click=on_submit>
                                        {move || strings().submit}
                                    </button>
                                }
                            }
                        >
                            <button class="btn btn--primary" on:click=on_next>
                                {move || strings().next}
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
