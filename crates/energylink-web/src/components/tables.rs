use energylink_core::records::{DetailRow, MonthlyRollup};
use energylink_core::tables::{RAW_HEADERS, RAW_PAGE_SIZE, ROLLUP_HEADERS, page_count, page_slice, raw_cells, rollup_cells};
use leptos::prelude::*;

#[component]
fn HeaderRow(headers: &'static [&'static str]) -> impl IntoView {
    view! {
        <thead>
            <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
        </thead>
    }
}

/// A table row whose first `text_columns` cells are left-aligned.
fn body_row<const N: usize>(cells: [String; N], text_columns: usize) -> impl IntoView {
    view! {
        <tr>
            {cells
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    let class = if i < text_columns { "" } else { "num" };
                    view! { <td class=class>{c}</td> }
                })
                .collect_view()}
        </tr>
    }
}

/// One row per month, chronological.
#[component]
pub fn RollupTable(#[prop(into)] rows: Signal<Vec<MonthlyRollup>>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="data-table">
                <HeaderRow headers=&ROLLUP_HEADERS />
                <tbody>
                    {move || rows.with(|r| r.iter().map(|row| body_row(rollup_cells(row), 1)).collect_view())}
                </tbody>
            </table>
        </div>
    }
}

const RAW_TEXT_COLUMNS: usize = 6;

/// Statement detail lines, paged.
#[component]
pub fn RawTable(#[prop(into)] rows: Signal<Vec<DetailRow>>) -> impl IntoView {
    let page = RwSignal::new(0usize);
    let pages = Memo::new(move |_| rows.with(|r| page_count(r.len(), RAW_PAGE_SIZE)));

    // New data starts again from the first page.
    Effect::new(move |_| {
        rows.track();
        page.set(0);
    });

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <HeaderRow headers=&RAW_HEADERS />
                <tbody>
                    {move || {
                        rows.with(|r| {
                            page_slice(r, page.get(), RAW_PAGE_SIZE)
                                .iter()
                                .map(|row| body_row(raw_cells(row), RAW_TEXT_COLUMNS))
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </div>
        <div class="pager">
            <button
                type="button"
                prop:disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Prev"
            </button>
            <span class="pager-status">
                {move || format!("Page {} of {} ({} rows)", page.get() + 1, pages.get(), rows.with(Vec::len))}
            </span>
            <button
                type="button"
                prop:disabled=move || page.get() + 1 >= pages.get()
                on:click=move |_| page.update(|p| *p = (*p + 1).min(pages.get_untracked() - 1))
            >
                "Next"
            </button>
        </div>
    }
}
