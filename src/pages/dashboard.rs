//! Dashboard: headline stats, distribution charts, and the searchable
//! case table with status tabs.

use leptos::prelude::*;

use crate::components::case_chart::CaseChart;
use crate::components::case_table::CaseTable;
use crate::components::county_stat_card::CountyStatCard;
use crate::components::layout::Layout;
use crate::data::cases::{by_status, search, CaseStatus, Cases};

const STATUS_TABS: [(&str, Option<CaseStatus>); 4] = [
    ("All Cases", None),
    ("New", Some(CaseStatus::New)),
    ("In Progress", Some(CaseStatus::InProgress)),
    ("Resolved", Some(CaseStatus::Resolved)),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cases = expect_context::<Cases>();

    let summary = cases.0.summary();
    let county_totals = cases.0.county_totals();
    let type_totals = cases.0.type_totals();
    let top_counties: Vec<_> = county_totals.iter().take(4).cloned().collect();

    let all_cases = StoredValue::new(cases.0.fetch_cases());
    let search_term = RwSignal::new(String::new());
    let filtered = RwSignal::new(all_cases.get_value());
    let tab = RwSignal::new(None::<CaseStatus>);

    let run_search = Callback::new(move |()| {
        let term = search_term.get_untracked();
        filtered.set(all_cases.with_value(|cases| search(cases, &term)));
    });

    view! {
        <Layout>
            <div class="dashboard-page">
                <div class="dashboard-page__heading">
                    <h1>"Dashboard"</h1>
                    <p>"Monitor and track GBV cases across Kenya"</p>
                </div>

                <div class="stat-grid stat-grid--summary">
                    <div class="card stat-card">
                        <div class="stat-card__header">
                            <span>"Total Cases"</span>
                            <span class="stat-card__dot stat-card__dot--primary"></span>
                        </div>
                        <div class="stat-card__value">{summary.total}</div>
                        <p class="stat-card__hint">"+12% from last month"</p>
                    </div>
                    <div class="card stat-card">
                        <div class="stat-card__header">
                            <span>"Active Cases"</span>
                            <span class="stat-card__dot stat-card__dot--amber"></span>
                        </div>
                        <div class="stat-card__value">{summary.active}</div>
                        <p class="stat-card__hint">"Being processed currently"</p>
                    </div>
                    <div class="card stat-card">
                        <div class="stat-card__header">
                            <span>"Resolved Cases"</span>
                            <span class="stat-card__dot stat-card__dot--green"></span>
                        </div>
                        <div class="stat-card__value">{summary.resolved}</div>
                        <p class="stat-card__hint">
                            {format!("{}% resolution rate", summary.resolution_rate)}
                        </p>
                    </div>
                </div>

                <div class="dashboard-page__charts">
                    <CaseChart
                        data=county_totals
                        title="Cases by County"
                        description="Distribution of reported cases across counties"
                    />
                    <CaseChart
                        data=type_totals
                        title="Cases by Type"
                        description="Breakdown of different types of reported abuse"
                    />
                </div>

                <div class="dashboard-page__cases">
                    <div class="dashboard-page__cases-header">
                        <h2>"Recent Cases"</h2>
                        <div class="search">
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
                    </div>

                    <div class="tabs">
                        {STATUS_TABS
                            .iter()
                            .map(|&(label, status)| {
                                let class = move || {
                                    if tab.get() == status { "tab tab--active" } else { "tab" }
                                };
                                view! {
                                    <button class=class on:click=move |_| tab.set(status)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || {
                        let status = tab.get();
                        view! {
                            <CaseTable
                                cases=Signal::derive(move || by_status(&filtered.get(), status))
                                show_status=status.is_none()
                            />
                        }
                    }}
                </div>

                <div class="dashboard-page__counties">
                    <h2>"Most Affected Counties"</h2>
                    <div class="stat-grid">
                        {top_counties
                            .into_iter()
                            .enumerate()
                            .map(|(index, point)| {
                                let rank = u32::try_from(index).unwrap_or(u32::MAX) + 1;
                                view! {
                                    <CountyStatCard
                                        county=point.name
                                        percentage=point.value
                                        rank=rank
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Layout>
    }
}
