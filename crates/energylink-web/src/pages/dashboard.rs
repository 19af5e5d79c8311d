use energylink_core::dashboard::{DashboardData, DashboardFilters};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::api::{fetch_filter_options, load_dashboard};
use crate::components::{ChartSelections, ComboChart, ErrorBanner, FilterBar, LineChart, RawTable, RollupTable, Section};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let options = Resource::new(|| (), |_| fetch_filter_options());

    let draft = RwSignal::new(DashboardFilters::default());
    let committed = RwSignal::new(DashboardFilters::default());
    // Bumped on every Apply/Reset so an unchanged filter set still reloads.
    let generation = RwSignal::new(0u64);

    let data = Resource::new(
        move || (generation.get(), committed.get()),
        |(_, filters)| load_dashboard(filters),
    );
    let last_good = StoredValue::new(DashboardData::default());
    let charts = ChartSelections::new();

    let apply = Callback::new(move |()| {
        committed.set(draft.get_untracked());
        generation.update(|g| *g += 1);
    });
    let reset = Callback::new(move |()| {
        draft.set(DashboardFilters::default());
        committed.set(DashboardFilters::default());
        generation.update(|g| *g += 1);
    });

    view! {
        <Section id="filters" title="Filters">
            <Suspense fallback=|| view! { <p class="loading">"Loading filters\u{2026}"</p> }>
                {move || {
                    options
                        .get()
                        .map(|result| match result {
                            Ok(opts) => view! { <FilterBar options=opts draft on_apply=apply on_reset=reset /> }.into_any(),
                            Err(e) => {
                                warn!("filter options unavailable: {e}");
                                view! {
                                    <ErrorBanner message=Some(format!("Could not load filter options: {e}")) />
                                    <FilterBar options=Default::default() draft on_apply=apply on_reset=reset />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </Section>

        <Transition fallback=|| view! { <p class="loading">"Loading dashboard\u{2026}"</p> }>
            {move || {
                data.get()
                    .map(|result| {
                        let (shown, error) = match result {
                            Ok(d) => {
                                last_good.set_value(d.clone());
                                (d, None)
                            }
                            Err(e) => {
                                warn!("dashboard load failed: {e}");
                                (last_good.get_value(), Some(format!("Could not load dashboard data: {e}")))
                            }
                        };
                        view! {
                            <ErrorBanner message=error />
                            <DashboardPanels data=shown charts />
                        }
                    })
            }}
        </Transition>
    }
}

#[component]
fn DashboardPanels(data: DashboardData, charts: ChartSelections) -> impl IntoView {
    let DashboardData { monthly, details } = data;
    let monthly_line = monthly.clone();
    let monthly_combo = monthly.clone();

    view! {
        <Section id="trends" title="Per-MCF Trends">
            <LineChart rows=monthly_line enabled=charts.line_series />
        </Section>
        <Section id="combo" title="Combo Chart">
            <ComboChart rows=monthly_combo bar=charts.combo_bar line=charts.combo_line />
        </Section>
        <Section id="rollup" title="Monthly Rollup">
            <RollupTable rows=monthly />
        </Section>
        <Section id="details" title="Raw Detail">
            <RawTable rows=details />
        </Section>
    }
}
