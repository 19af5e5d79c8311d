use energylink_core::dashboard::{DashboardFilters, FilterList};
use energylink_core::records::FilterOptions;
use leptos::prelude::*;

/// Dashboard filter controls. Edits go to `draft`; nothing loads until Apply.
#[component]
pub fn FilterBar(
    options: FilterOptions,
    draft: RwSignal<DashboardFilters>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let dates = options.sorted_dates();

    view! {
        <div class="filter-bar">
            <CheckList title="Operators" which=FilterList::Operators values=options.operators draft />
            <CheckList title="Properties" which=FilterList::Properties values=options.properties draft />
            <CheckList title="Categories" which=FilterList::Categories values=options.categories draft />

            <div class="date-range">
                <label>
                    "From "
                    <MonthSelect
                        dates=dates.clone()
                        value=Signal::derive(move || draft.with(|f| f.date_start.clone()))
                        on_pick=Callback::new(move |v: String| draft.update(|f| f.set_date_start(&v)))
                    />
                </label>
                <label>
                    "To "
                    <MonthSelect
                        dates
                        value=Signal::derive(move || draft.with(|f| f.date_end.clone()))
                        on_pick=Callback::new(move |v: String| draft.update(|f| f.set_date_end(&v)))
                    />
                </label>
            </div>

            <div class="filter-actions">
                <button type="button" class="btn-primary" on:click=move |_| on_apply.run(())>
                    "Apply"
                </button>
                <button type="button" on:click=move |_| on_reset.run(())>
                    "Reset"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CheckList(
    title: &'static str,
    which: FilterList,
    values: Vec<String>,
    draft: RwSignal<DashboardFilters>,
) -> impl IntoView {
    view! {
        <fieldset class="check-list">
            <legend>{title}</legend>
            <div class="check-list-items">
                {values
                    .into_iter()
                    .map(|value| {
                        let checked = value.clone();
                        let toggled = value.clone();
                        view! {
                            <label class="check-item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|f| f.is_selected(which, &checked))
                                    on:change=move |_| draft.update(|f| f.toggle(which, &toggled))
                                />
                                {value}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

/// Month dropdown in chronological order; the empty option means no bound.
#[component]
fn MonthSelect(dates: Vec<String>, value: Signal<Option<String>>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| on_pick.run(event_target_value(&ev))
        >
            <option value="">"Any"</option>
            {dates
                .into_iter()
                .map(|d| {
                    let v = d.clone();
                    view! { <option value=v>{d}</option> }
                })
                .collect_view()}
        </select>
    }
}
