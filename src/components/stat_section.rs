//! Home-page section showing the counties with the highest GBV rates.

use leptos::prelude::*;

use crate::components::county_stat_card::CountyStatCard;
use crate::data::cases::Cases;

#[component]
pub fn StatSection() -> impl IntoView {
    let cases = expect_context::<Cases>();
    let top_counties: Vec<_> = cases.0.county_totals().into_iter().take(4).collect();

    view! {
        <section class="section section--muted">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"GBV Rate in Kenya"</h2>
                    <p>"Counties with the highest rates of gender-based violence"</p>
                </div>
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
        </section>
    }
}
