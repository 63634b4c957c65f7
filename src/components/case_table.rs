//! Case listing table shared by the dashboard status tabs.

use leptos::prelude::*;

use crate::data::cases::{CaseRecord, CaseStatus};

const fn status_badge(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::New => "badge badge--new",
        CaseStatus::InProgress => "badge badge--progress",
        CaseStatus::Resolved => "badge badge--resolved",
    }
}

/// Table of case rows. `show_status` is off in the per-status tabs where
/// the column would be redundant.
#[component]
pub fn CaseTable(#[prop(into)] cases: Signal<Vec<CaseRecord>>, show_status: bool) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Case ID"</th>
                        <th>"Date Reported"</th>
                        <th>"Victim Name"</th>
                        <th>"County"</th>
                        <th>"Type"</th>
                        <Show when=move || show_status>
                            <th>"Status"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = cases.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="table__empty">
                                        "No cases found matching your search."
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }

                        rows.into_iter()
                            .map(|case| {
                                view! {
                                    <tr>
                                        <td>{case.id}</td>
                                        <td>{case.date}</td>
                                        <td>{case.victim_name}</td>
                                        <td>{case.county}</td>
                                        <td>{case.case_type}</td>
                                        <Show when=move || show_status>
                                            <td>
                                                <span class=status_badge(case.status)>
                                                    {case.status.label()}
                                                </span>
                                            </td>
                                        </Show>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
