use charming::Chart;
use energylink_core::charts::{
    COMBO_DEFAULT_BAR, COMBO_DEFAULT_LINE, COMBO_OPTIONS, LINE_SERIES, Metric, combo_chart, default_line_metrics,
    line_chart,
};
use energylink_core::records::MonthlyRollup;
use leptos::prelude::*;

const LINE_CHART_ID: &str = "line-chart";
const COMBO_CHART_ID: &str = "combo-chart";

/// Draw the chart `build` returns into the element `id`, redrawing whenever
/// the signals it reads change. Only runs in the browser.
fn mount_chart(id: &'static str, build: impl Fn() -> Chart + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use charming::WasmRenderer;
        use leptos::logging::warn;

        const WIDTH: u32 = 800;
        const HEIGHT: u32 = 320;

        // One ECharts instance per mounted element; later redraws update it.
        let instance = StoredValue::new_local(None);
        Effect::new(move |_| {
            let chart = build();
            instance.update_value(|slot| match slot {
                None => match WasmRenderer::new(WIDTH, HEIGHT).render(id, &chart) {
                    Ok(echarts) => *slot = Some(echarts),
                    Err(e) => warn!("chart {id} failed to render: {e:?}"),
                },
                Some(echarts) => WasmRenderer::update(echarts, &chart),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, build);
}

// ── Line chart ────────────────────────────────────────────────────────────────

/// Series and metric picks, kept by the page across reloads.
#[derive(Debug, Clone, Copy)]
pub struct ChartSelections {
    pub line_series: RwSignal<Vec<Metric>>,
    pub combo_bar: RwSignal<Metric>,
    pub combo_line: RwSignal<Metric>,
}

impl ChartSelections {
    pub fn new() -> Self {
        Self {
            line_series: RwSignal::new(default_line_metrics()),
            combo_bar: RwSignal::new(COMBO_DEFAULT_BAR),
            combo_line: RwSignal::new(COMBO_DEFAULT_LINE),
        }
    }
}

impl Default for ChartSelections {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-MCF economics over time, one toggleable line per series.
#[component]
pub fn LineChart(#[prop(into)] rows: Signal<Vec<MonthlyRollup>>, enabled: RwSignal<Vec<Metric>>) -> impl IntoView {
    mount_chart(LINE_CHART_ID, move || rows.with(|r| enabled.with(|e| line_chart(r, e))));

    view! {
        <div class="series-toggles">
            {LINE_SERIES
                .iter()
                .map(|s| {
                    let metric = s.metric;
                    view! {
                        <label class="series-toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || enabled.with(|e| e.contains(&metric))
                                on:change=move |_| {
                                    enabled
                                        .update(|e| {
                                            if let Some(pos) = e.iter().position(|m| *m == metric) {
                                                e.remove(pos);
                                            } else {
                                                e.push(metric);
                                            }
                                        })
                                }
                            />
                            <span class="swatch" style=format!("background:{}", s.color)></span>
                            {s.label}
                        </label>
                    }
                })
                .collect_view()}
        </div>
        <div id=LINE_CHART_ID class="chart"></div>
    }
}

// ── Combo chart ───────────────────────────────────────────────────────────────

/// One metric as bars against another as a line.
#[component]
pub fn ComboChart(
    #[prop(into)] rows: Signal<Vec<MonthlyRollup>>,
    bar: RwSignal<Metric>,
    line: RwSignal<Metric>,
) -> impl IntoView {
    mount_chart(COMBO_CHART_ID, move || rows.with(|r| combo_chart(r, bar.get(), line.get())));

    view! {
        <div class="combo-controls">
            <label>"Bars " <MetricSelect selected=bar /></label>
            <label>"Line " <MetricSelect selected=line /></label>
        </div>
        <div id=COMBO_CHART_ID class="chart"></div>
    }
}

#[component]
fn MetricSelect(selected: RwSignal<Metric>) -> impl IntoView {
    view! {
        <select
            prop:value=move || selected.get().key()
            on:change=move |ev| {
                if let Some(m) = Metric::from_key(&event_target_value(&ev)) {
                    selected.set(m);
                }
            }
        >
            {COMBO_OPTIONS
                .iter()
                .map(|(m, label)| view! { <option value=m.key()>{*label}</option> })
                .collect_view()}
        </select>
    }
}
