//! Delayed-cases view: cases stalled long enough to need escalation.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::data::cases::{search_delayed, Cases};

#[component]
pub fn DelayedCasesPage() -> impl IntoView {
    let cases = expect_context::<Cases>();

    let all_delayed = StoredValue::new(cases.0.delayed_cases());
    let search_term = RwSignal::new(String::new());
    let filtered = RwSignal::new(all_delayed.get_value());

    let run_search = Callback::new(move |()| {
        let term = search_term.get_untracked();
        filtered.set(all_delayed.with_value(|cases| search_delayed(cases, &term)));
    });

    view! {
        <Layout>
            <div class="delayed-page">
                <div class="delayed-page__heading">
                    <div>
                        <h1>"Delayed Cases"</h1>
                        <p>"Monitor cases requiring immediate attention"</p>
                    </div>
                    <div class="card stat-card">
                        <div class="stat-card__header">
                            <span>"Total Delayed Cases"</span>
                            <span class="stat-card__dot stat-card__dot--red"></span>
                        </div>
                        <div class="stat-card__value">{move || filtered.get().len()}</div>
                    </div>
                </div>

                <div class="delayed-page__search search">
                    <input
                        class="input search__input"
                        type="text"
                        placeholder="Search cases..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| search_term.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                run_search.run(());
                            }
                        }
                    />
                    <button class="btn btn--primary" on:click=move |_| run_search.run(())>
                        "Search"
                    </button>
                </div>

                <div class="card table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Case ID"</th>
                                <th>"Report Date"</th>
                                <th>"Victim Name"</th>
                                <th>"County"</th>
                                <th>"Type"</th>
                                <th>"Days Elapsed"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filtered
                                    .get()
                                    .into_iter()
                                    .map(|case| {
                                        view! {
                                            <tr>
                                                <td class="table__id">{case.id}</td>
                                                <td>{case.report_date}</td>
                                                <td>{case.victim_name}</td>
                                                <td>{case.county}</td>
                                                <td>{case.case_type}</td>
                                                <td>
                                                    <span class="table__elapsed">
                                                        {format!("{} days", case.days_elapsed)}
                                                    </span>
                                                </td>
                                                <td>{case.status}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </Layout>
    }
}
