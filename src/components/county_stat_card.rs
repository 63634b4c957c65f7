//! County rate card with a percentage meter.

use leptos::prelude::*;

/// Shows one county's GBV rate; the top three ranks get the highlighted
/// header treatment.
#[component]
pub fn CountyStatCard(
    #[prop(into)] county: String,
    percentage: u32,
    #[prop(optional, into)] rank: Option<u32>,
) -> impl IntoView {
    let header_class = if rank.is_some_and(|r| r <= 3) {
        "county-card__header county-card__header--top"
    } else {
        "county-card__header"
    };

    view! {
        <div class="card county-card">
            <div class=header_class>
                <span class="county-card__name">{county}</span>
                {rank.map(|rank| view! { <span class="county-card__rank">{format!("Rank #{rank}")}</span> })}
            </div>
            <div class="county-card__body">
                <span class="county-card__pct">{format!("{percentage}%")}</span>
                <div class="county-card__meter">
                    <div class="county-card__meter-fill" style:width=format!("{percentage}%")></div>
                </div>
            </div>
        </div>
    }
}
