use energylink_core::invoice_doc::{DETAIL_HEADERS, FIRST_NUMERIC_COLUMN, InvoiceDocument, PropertyBlock};
use leptos::prelude::*;

/// Printable revenue statement for one invoice.
#[component]
pub fn InvoiceView(doc: InvoiceDocument) -> impl IntoView {
    view! {
        <article class="invoice-doc">
            <header class="invoice-header">
                <h3>{doc.operator}</h3>
                <dl class="invoice-meta">
                    <div><dt>"Owner #"</dt><dd>{doc.owner_number}</dd></div>
                    <div><dt>"Check #"</dt><dd>{doc.check_number}</dd></div>
                    <div><dt>"Check Date"</dt><dd>{doc.invoice_date}</dd></div>
                    <div><dt>"Acct Month"</dt><dd>{doc.op_acct_month}</dd></div>
                </dl>
            </header>

            <div class="invoice-summary">
                {doc
                    .summary
                    .into_iter()
                    .map(|cell| {
                        let class = if cell.emphasis { "summary-cell net" } else { "summary-cell" };
                        view! {
                            <div class=class>
                                <div class="summary-label">{cell.label}</div>
                                <div class="summary-amount">{cell.amount}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {doc.properties.into_iter().map(|p| view! { <PropertyView block=p /> }).collect_view()}
        </article>
    }
}

#[component]
fn PropertyView(block: PropertyBlock) -> impl IntoView {
    view! {
        <section class="invoice-property">
            <h4 class="property-heading">
                <span>{block.description}</span>
                <span class="property-total">{block.total}</span>
            </h4>
            <div class="property-meta">
                <span>"Cost Center: " {block.cost_center}</span>
                <span>"Location: " {block.location}</span>
                <span>"Revenue: " {block.revenue}</span>
                <span>"Tax: " {block.tax}</span>
                <span>"Deductions: " {block.deductions}</span>
            </div>
            <table class="data-table detail-table">
                <thead>
                    <tr>{DETAIL_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {block
                        .rows
                        .into_iter()
                        .map(|row| {
                            let row_class = if row.flagged { "flagged" } else { "" };
                            view! {
                                <tr class=row_class>
                                    {row
                                        .cells
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, c)| {
                                            let class = if i >= FIRST_NUMERIC_COLUMN { "num" } else { "" };
                                            view! { <td class=class>{c}</td> }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
