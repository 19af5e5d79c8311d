//! Cascading invoice picker: date preset → operator → invoice.
//!
//! [`FilterState`] is a plain value. [`InvoiceCatalog::reduce`] takes the
//! current state and one [`InvoiceAction`] and returns the next state together
//! with what the detail panel should do. Each upstream change clears the
//! selections below it, so the state never points at an operator or invoice
//! that the current filters would hide.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::records::InvoiceSummary;

// ── Presets ───────────────────────────────────────────────────────────────────

/// A date-range button on the invoice tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePreset {
    pub label: &'static str,
    /// Months back from today; 0 disables the cutoff.
    pub months: u32,
}

pub const DATE_PRESETS: [DatePreset; 5] = [
    DatePreset { label: "All", months: 0 },
    DatePreset { label: "3 Months", months: 3 },
    DatePreset { label: "6 Months", months: 6 },
    DatePreset { label: "12 Months", months: 12 },
    DatePreset { label: "24 Months", months: 24 },
];

// ── State & transitions ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub cutoff_months: u32,
    pub selected_operator: Option<String>,
    pub selected_invoice_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceAction {
    SetDateCutoff(u32),
    SetOperator(Option<String>),
    SetInvoice(Option<String>),
}

/// What the invoice detail panel must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEffect {
    Load(String),
    Clear,
}

/// An entry in the invoice dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChoice {
    pub value: String,
    pub label: String,
}

impl InvoiceChoice {
    fn from_summary(inv: &InvoiceSummary) -> Self {
        Self {
            value: inv.invoice_id.clone(),
            label: format!(
                "{} - Chk #{} - {} (${:.2})",
                inv.operator,
                inv.check_number,
                inv.invoice_date,
                inv.total_amount.unwrap_or(0.0)
            ),
        }
    }
}

// ── Date handling ─────────────────────────────────────────────────────────────

/// The cutoff date for `months` back from `today`, or `None` for no cutoff.
/// Invoices must be dated strictly after it.
///
/// A day past the end of the target month rolls into the next one, so
/// May 31 - 3 months is Mar 3 rather than Feb 28.
pub fn date_cutoff(months: u32, today: NaiveDate) -> Option<NaiveDate> {
    if months == 0 {
        return None;
    }
    let Some(first) = today.with_day(1).and_then(|d| d.checked_sub_months(Months::new(months))) else {
        return Some(NaiveDate::MIN);
    };
    Some(first.checked_add_days(Days::new(u64::from(today.day0()))).unwrap_or(first))
}

/// Parse an invoice date as ISO (`2026-01-30`) or US (`01/30/2026`).
pub fn parse_invoice_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// The fetched invoice list plus the "today" all cutoffs are measured from.
#[derive(Debug, Clone)]
pub struct InvoiceCatalog {
    invoices: Vec<InvoiceSummary>,
    today: NaiveDate,
}

impl InvoiceCatalog {
    pub fn new(invoices: Vec<InvoiceSummary>, today: NaiveDate) -> Self {
        Self { invoices, today }
    }

    pub fn invoices(&self) -> &[InvoiceSummary] {
        &self.invoices
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Invoices passing the date cutoff, in fetch order.
    ///
    /// Unparseable dates never pass an active cutoff.
    fn within_cutoff(&self, cutoff_months: u32) -> impl Iterator<Item = &InvoiceSummary> {
        let cutoff = date_cutoff(cutoff_months, self.today);
        self.invoices.iter().filter(move |inv| match cutoff {
            None => true,
            Some(cutoff) => parse_invoice_date(&inv.invoice_date).is_some_and(|d| d > cutoff),
        })
    }

    /// Distinct operators among invoices passing the date cutoff, sorted.
    pub fn candidate_operators(&self, state: &FilterState) -> Vec<String> {
        self.within_cutoff(state.cutoff_months)
            .map(|inv| inv.operator.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The selected operator, if it is still offered under the current cutoff.
    pub fn effective_operator<'a>(&self, state: &'a FilterState) -> Option<&'a str> {
        let op = state.selected_operator.as_deref()?;
        self.within_cutoff(state.cutoff_months)
            .any(|inv| inv.operator == op)
            .then_some(op)
    }

    /// Invoices passing both the date and operator filters, in fetch order.
    pub fn candidate_invoices(&self, state: &FilterState) -> Vec<InvoiceChoice> {
        let operator = self.effective_operator(state);
        self.within_cutoff(state.cutoff_months)
            .filter(|inv| operator.is_none_or(|op| inv.operator == op))
            .map(InvoiceChoice::from_summary)
            .collect()
    }

    /// Apply one transition, returning the next state and the detail-panel effect.
    pub fn reduce(&self, state: FilterState, action: InvoiceAction) -> (FilterState, DetailEffect) {
        match action {
            InvoiceAction::SetDateCutoff(months) => {
                tracing::debug!(months, "invoice date cutoff changed");
                let next = FilterState {
                    cutoff_months: months,
                    selected_operator: None,
                    selected_invoice_id: None,
                };
                (next, DetailEffect::Clear)
            }
            InvoiceAction::SetOperator(op) => {
                let mut next = FilterState {
                    selected_operator: op.filter(|o| !o.is_empty()),
                    selected_invoice_id: None,
                    ..state
                };
                if next.selected_operator.is_some() && self.effective_operator(&next).is_none() {
                    tracing::warn!(
                        operator = next.selected_operator.as_deref(),
                        "operator not offered under current cutoff, ignoring"
                    );
                    next.selected_operator = None;
                }
                (next, DetailEffect::Clear)
            }
            InvoiceAction::SetInvoice(id) => {
                let id = id.filter(|i| !i.is_empty());
                let offered = id
                    .as_deref()
                    .is_some_and(|id| self.candidate_invoices(&state).iter().any(|c| c.value == id));

                match id {
                    Some(id) if offered => {
                        let next = FilterState {
                            selected_invoice_id: Some(id.clone()),
                            ..state
                        };
                        (next, DetailEffect::Load(id))
                    }
                    other => {
                        if let Some(id) = other {
                            tracing::warn!(invoice_id = %id, "invoice not offered under current filters, ignoring");
                        }
                        let next = FilterState {
                            selected_invoice_id: None,
                            ..state
                        };
                        (next, DetailEffect::Clear)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(id: &str, operator: &str, date: &str, amount: f64) -> InvoiceSummary {
        InvoiceSummary {
            invoice_id: id.into(),
            operator: operator.into(),
            check_number: format!("{}00", id),
            invoice_date: date.into(),
            total_amount: Some(amount),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn catalog() -> InvoiceCatalog {
        InvoiceCatalog::new(
            vec![
                inv("1", "Devon", "2026-03-01", 120.0),
                inv("2", "Apache", "2025-12-20", 80.5),
                inv("3", "Devon", "2025-01-10", 40.0),
                inv("4", "Coterra", "2024-06-30", 15.25),
                inv("5", "Apache", "not a date", 1.0),
            ],
            today(),
        )
    }

    #[test]
    fn cutoff_zero_means_everything() {
        assert_eq!(date_cutoff(0, today()), None);
        let ops = catalog().candidate_operators(&FilterState::default());
        assert_eq!(ops, vec!["Apache", "Coterra", "Devon"]);
        assert_eq!(catalog().candidate_invoices(&FilterState::default()).len(), 5);
    }

    #[test]
    fn cutoff_rolls_past_short_months() {
        let may31 = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        assert_eq!(date_cutoff(3, may31), NaiveDate::from_ymd_opt(2026, 3, 3));
        let mar31_leap = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(date_cutoff(1, mar31_leap), NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(date_cutoff(12, today()), NaiveDate::from_ymd_opt(2025, 3, 15));
    }

    #[test]
    fn rolled_over_cutoff_hides_end_of_february() {
        let may31 = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        let cat = InvoiceCatalog::new(
            vec![
                inv("1", "Feb28Op", "2026-02-28", 1.0),
                inv("2", "Mar02Op", "2026-03-02", 1.0),
                inv("3", "Mar03Op", "2026-03-03", 1.0),
                inv("4", "Mar04Op", "2026-03-04", 1.0),
            ],
            may31,
        );
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetDateCutoff(3));
        assert_eq!(cat.candidate_operators(&state), vec!["Mar04Op"]);
    }

    #[test]
    fn invoice_on_the_cutoff_day_is_excluded() {
        let cat = InvoiceCatalog::new(
            vec![
                inv("1", "Boundary", "2025-03-15", 1.0),
                inv("2", "DayAfter", "2025-03-16", 1.0),
            ],
            today(),
        );
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetDateCutoff(12));
        assert_eq!(cat.candidate_operators(&state), vec!["DayAfter"]);
    }

    #[test]
    fn cutoff_drops_stale_operators() {
        let state = FilterState {
            cutoff_months: 6,
            ..Default::default()
        };
        assert_eq!(catalog().candidate_operators(&state), vec!["Apache", "Devon"]);

        let state = FilterState {
            cutoff_months: 3,
            ..Default::default()
        };
        // Invoice 5 has an unparseable date and is excluded under a cutoff
        assert_eq!(catalog().candidate_operators(&state), vec!["Apache", "Devon"]);
        let ids: Vec<_> = catalog()
            .candidate_invoices(&state)
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn invoice_labels_and_order() {
        let state = FilterState {
            selected_operator: Some("Apache".into()),
            ..Default::default()
        };
        let choices = catalog().candidate_invoices(&state);
        assert_eq!(
            choices,
            vec![
                InvoiceChoice {
                    value: "2".into(),
                    label: "Apache - Chk #200 - 2025-12-20 ($80.50)".into(),
                },
                InvoiceChoice {
                    value: "5".into(),
                    label: "Apache - Chk #500 - not a date ($1.00)".into(),
                },
            ]
        );
    }

    #[test]
    fn preset_clears_downstream_selections() {
        let cat = catalog();
        let state = FilterState {
            cutoff_months: 0,
            selected_operator: Some("Coterra".into()),
            selected_invoice_id: Some("4".into()),
        };
        let (next, effect) = cat.reduce(state, InvoiceAction::SetDateCutoff(12));
        assert_eq!(
            next,
            FilterState {
                cutoff_months: 12,
                selected_operator: None,
                selected_invoice_id: None,
            }
        );
        assert_eq!(effect, DetailEffect::Clear);
    }

    #[test]
    fn operator_change_clears_invoice() {
        let cat = catalog();
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetInvoice(Some("1".into())));
        assert_eq!(state.selected_invoice_id.as_deref(), Some("1"));

        let (next, effect) = cat.reduce(state, InvoiceAction::SetOperator(Some("Apache".into())));
        assert_eq!(next.selected_operator.as_deref(), Some("Apache"));
        assert_eq!(next.selected_invoice_id, None);
        assert_eq!(effect, DetailEffect::Clear);
    }

    #[test]
    fn operator_outside_cutoff_is_rejected() {
        let cat = catalog();
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetDateCutoff(6));
        let (next, _) = cat.reduce(state, InvoiceAction::SetOperator(Some("Coterra".into())));
        assert_eq!(next.selected_operator, None);
        assert!(!cat.candidate_operators(&next).contains(&"Coterra".to_string()));
    }

    #[test]
    fn stale_operator_reads_as_no_selection() {
        // Constructed directly, bypassing the reducer
        let state = FilterState {
            cutoff_months: 6,
            selected_operator: Some("Coterra".into()),
            selected_invoice_id: None,
        };
        let cat = catalog();
        assert_eq!(cat.effective_operator(&state), None);
        assert_eq!(cat.candidate_invoices(&state).len(), 2);
    }

    #[test]
    fn empty_operator_value_means_all() {
        let (next, _) = catalog().reduce(FilterState::default(), InvoiceAction::SetOperator(Some(String::new())));
        assert_eq!(next.selected_operator, None);
    }

    #[test]
    fn selecting_invoice_loads_detail() {
        let cat = catalog();
        let (state, effect) = cat.reduce(FilterState::default(), InvoiceAction::SetInvoice(Some("3".into())));
        assert_eq!(effect, DetailEffect::Load("3".into()));
        assert_eq!(state.selected_invoice_id.as_deref(), Some("3"));

        let (state, effect) = cat.reduce(state, InvoiceAction::SetInvoice(None));
        assert_eq!(effect, DetailEffect::Clear);
        assert_eq!(state.selected_invoice_id, None);
    }

    #[test]
    fn filtered_out_invoice_is_not_selected() {
        let cat = catalog();
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetOperator(Some("Devon".into())));
        let (next, effect) = cat.reduce(state, InvoiceAction::SetInvoice(Some("2".into())));
        assert_eq!(next.selected_invoice_id, None);
        assert_eq!(effect, DetailEffect::Clear);
    }

    #[test]
    fn thirteen_months_ago_falls_outside_twelve() {
        let today = today();
        let old = today.checked_sub_months(Months::new(13)).unwrap();
        let recent = today.checked_sub_months(Months::new(1)).unwrap();
        let cat = InvoiceCatalog::new(
            vec![
                inv("a", "A", &old.format("%Y-%m-%d").to_string(), 1.0),
                inv("b", "B", &recent.format("%Y-%m-%d").to_string(), 1.0),
            ],
            today,
        );
        let (state, _) = cat.reduce(FilterState::default(), InvoiceAction::SetDateCutoff(12));
        assert_eq!(cat.candidate_operators(&state), vec!["B"]);
    }

    #[test]
    fn parses_us_dates() {
        assert_eq!(parse_invoice_date("01/30/2026"), NaiveDate::from_ymd_opt(2026, 1, 30));
        assert_eq!(parse_invoice_date(" 2026-01-30 "), NaiveDate::from_ymd_opt(2026, 1, 30));
        assert_eq!(parse_invoice_date(""), None);
    }
}
