//! Bar chart card for case distributions.

use leptos::prelude::*;

use crate::data::cases::ChartPoint;

/// Column chart over a small labelled dataset. Bars scale against the
/// largest value in the set.
#[component]
pub fn CaseChart(
    data: Vec<ChartPoint>,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    let max = data.iter().map(|point| point.value).max().unwrap_or(0).max(1);

    view! {
        <div class="card chart">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <p class="card__subtitle">{description}</p>
            </div>
            <div class="chart__bars">
                {data
                    .into_iter()
                    .map(|point| {
                        let pct = point.value * 100 / max;
                        view! {
                            <div class="chart__column">
                                <span class="chart__value">{point.value}</span>
                                <div class="chart__bar" style:height=format!("{pct}%")></div>
                                <span class="chart__label">{point.name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
