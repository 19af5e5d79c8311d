use energylink_core::invoice_doc::InvoiceDocument;
use energylink_core::invoice_filter::{DATE_PRESETS, DetailEffect, FilterState, InvoiceAction, InvoiceCatalog};
use energylink_core::records::{Invoice, InvoiceSummary};
use leptos::logging::warn;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::{fetch_invoice, fetch_invoice_list};
use crate::components::{ErrorBanner, InvoiceView, Section};

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let invoices = Resource::new(|| (), |_| fetch_invoice_list());

    view! {
        <Section id="invoices" title="Invoices">
            <Suspense fallback=|| view! { <p class="loading">"Loading invoices\u{2026}"</p> }>
                {move || {
                    invoices
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <InvoicePicker invoices=list /> }.into_any(),
                            Err(e) => {
                                warn!("invoice list unavailable: {e}");
                                view! { <ErrorBanner message=Some(format!("Could not load invoices: {e}")) /> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </Section>
    }
}

/// What the detail panel shows for the current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
enum DetailPanel {
    Empty,
    NotFound,
    Loaded(Box<Invoice>),
}

async fn load_detail(invoice_id: Option<String>) -> Result<DetailPanel, ServerFnError> {
    let Some(id) = invoice_id else {
        return Ok(DetailPanel::Empty);
    };
    Ok(match fetch_invoice(id).await? {
        Some(invoice) => DetailPanel::Loaded(Box::new(invoice)),
        None => DetailPanel::NotFound,
    })
}

/// Date preset → operator → invoice, then the selected invoice below.
#[component]
fn InvoicePicker(invoices: Vec<InvoiceSummary>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let catalog = StoredValue::new(InvoiceCatalog::new(invoices, today));
    let state = RwSignal::new(FilterState::default());
    let detail_request = RwSignal::new(None::<String>);

    let dispatch = move |action: InvoiceAction| {
        let (next, effect) = catalog.with_value(|c| c.reduce(state.get_untracked(), action));
        state.set(next);
        detail_request.set(match effect {
            DetailEffect::Load(id) => Some(id),
            DetailEffect::Clear => None,
        });
    };

    let operators = Memo::new(move |_| state.with(|s| catalog.with_value(|c| c.candidate_operators(s))));
    let choices = Memo::new(move |_| state.with(|s| catalog.with_value(|c| c.candidate_invoices(s))));
    let detail = Resource::new(move || detail_request.get(), load_detail);

    view! {
        <div class="invoice-picker">
            <div class="preset-row">
                {DATE_PRESETS
                    .iter()
                    .map(|preset| {
                        let months = preset.months;
                        view! {
                            <button
                                type="button"
                                class="preset"
                                class:active=move || state.with(|s| s.cutoff_months == months)
                                on:click=move |_| dispatch(InvoiceAction::SetDateCutoff(months))
                            >
                                {preset.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <label>
                "Operator "
                <select
                    prop:value=move || state.with(|s| s.selected_operator.clone().unwrap_or_default())
                    on:change=move |ev| dispatch(InvoiceAction::SetOperator(Some(event_target_value(&ev))))
                >
                    <option value="">"All operators"</option>
                    {move || {
                        operators
                            .get()
                            .into_iter()
                            .map(|op| {
                                let v = op.clone();
                                view! { <option value=v>{op}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <label>
                "Invoice "
                <select
                    prop:value=move || state.with(|s| s.selected_invoice_id.clone().unwrap_or_default())
                    on:change=move |ev| dispatch(InvoiceAction::SetInvoice(Some(event_target_value(&ev))))
                >
                    <option value="">"Select an invoice\u{2026}"</option>
                    {move || {
                        choices
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.value>{c.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <span class="picker-count">{move || format!("{} invoices", choices.with(Vec::len))}</span>
        </div>

        <Transition fallback=|| view! { <p class="loading">"Loading invoice\u{2026}"</p> }>
            {move || {
                detail
                    .get()
                    .map(|result| match result {
                        Ok(DetailPanel::Empty) => ().into_any(),
                        Ok(DetailPanel::NotFound) => view! { <p class="not-found">"Invoice not found."</p> }.into_any(),
                        Ok(DetailPanel::Loaded(invoice)) => {
                            view! { <InvoiceView doc=InvoiceDocument::from(invoice.as_ref()) /> }.into_any()
                        }
                        Err(e) => {
                            warn!("invoice detail unavailable: {e}");
                            view! { <ErrorBanner message=Some(format!("Could not load invoice: {e}")) /> }.into_any()
                        }
                    })
            }}
        </Transition>
    }
}
