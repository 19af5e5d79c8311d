//! On-screen revenue statement built from a fetched [`Invoice`].

use crate::fmt::{fixed, money};
use crate::records::{DetailLine, Invoice, PropertySection};

/// Interest types shown without highlighting; anything else is flagged.
const ROYALTY_INTEREST_TYPES: [&str; 2] = ["ROYALTY INTEREST", "RI"];

pub fn is_royalty_interest(type_description: Option<&str>) -> bool {
    type_description.is_some_and(|t| ROYALTY_INTEREST_TYPES.contains(&t))
}

pub const DETAIL_HEADERS: [&str; 10] = [
    "Category",
    "Code",
    "Type",
    "Prod Date",
    "Volume",
    "Price",
    "Value",
    "Owner %",
    "Owner Vol",
    "Owner Value",
];

/// Index of the first right-aligned (numeric) detail column.
pub const FIRST_NUMERIC_COLUMN: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCell {
    pub label: &'static str,
    pub amount: String,
    /// Rendered larger and bold (net amount).
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTableRow {
    pub cells: [String; 10],
    /// Non-royalty interest type.
    pub flagged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBlock {
    pub description: String,
    pub total: String,
    pub cost_center: String,
    pub location: String,
    pub revenue: String,
    pub tax: String,
    pub deductions: String,
    pub rows: Vec<DetailTableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub operator: String,
    pub owner_number: String,
    pub check_number: String,
    pub invoice_date: String,
    pub op_acct_month: String,
    pub summary: [SummaryCell; 4],
    pub properties: Vec<PropertyBlock>,
}

fn text(val: &Option<String>) -> String {
    val.clone().unwrap_or_default()
}

impl From<&DetailLine> for DetailTableRow {
    fn from(d: &DetailLine) -> Self {
        Self {
            cells: [
                text(&d.product_category),
                text(&d.code),
                text(&d.type_description),
                text(&d.production_date),
                fixed(d.property_volume, 2),
                fixed(d.property_price, 4),
                money(d.property_value),
                fixed(d.owner_pct, 4),
                fixed(d.owner_volume, 2),
                money(d.owner_value),
            ],
            flagged: !is_royalty_interest(d.type_description.as_deref()),
        }
    }
}

impl From<&PropertySection> for PropertyBlock {
    fn from(p: &PropertySection) -> Self {
        Self {
            description: p.description.clone(),
            total: money(p.total),
            cost_center: text(&p.cost_center),
            location: format!("{}, {}", text(&p.state), text(&p.county)),
            revenue: money(p.owner_share_revenue),
            tax: money(p.tax),
            deductions: money(p.deductions),
            rows: p.details.iter().map(DetailTableRow::from).collect(),
        }
    }
}

impl From<&Invoice> for InvoiceDocument {
    fn from(inv: &Invoice) -> Self {
        Self {
            operator: inv.operator.clone(),
            owner_number: inv.owner_number.clone(),
            check_number: inv.check_number.clone(),
            invoice_date: inv.invoice_date.clone(),
            op_acct_month: inv.op_acct_month.clone(),
            summary: [
                SummaryCell {
                    label: "Revenue",
                    amount: money(inv.total_revenue),
                    emphasis: false,
                },
                SummaryCell {
                    label: "Tax",
                    amount: money(inv.total_tax),
                    emphasis: false,
                },
                SummaryCell {
                    label: "Deductions",
                    amount: money(inv.total_deductions),
                    emphasis: false,
                },
                SummaryCell {
                    label: "Net Amount",
                    amount: money(inv.total_amount),
                    emphasis: true,
                },
            ],
            properties: inv.properties.iter().map(PropertyBlock::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(type_description: Option<&str>) -> DetailLine {
        DetailLine {
            product_category: Some("GAS".into()),
            code: Some("400".into()),
            type_description: type_description.map(Into::into),
            production_date: Some("Jan 24".into()),
            property_volume: Some(1520.456),
            property_price: Some(2.71828),
            property_value: Some(4133.1),
            owner_pct: Some(0.00390625),
            owner_volume: None,
            owner_value: Some(-16.14),
        }
    }

    #[test]
    fn royalty_types_are_not_flagged() {
        assert!(is_royalty_interest(Some("ROYALTY INTEREST")));
        assert!(is_royalty_interest(Some("RI")));
        assert!(!is_royalty_interest(Some("SEVERANCE TAX")));
        assert!(!is_royalty_interest(Some("ri")));
        assert!(!is_royalty_interest(None));
    }

    #[test]
    fn detail_row_formatting() {
        let row = DetailTableRow::from(&line(Some("GATHERING")));
        assert!(row.flagged);
        assert_eq!(row.cells[4], "1520.46");
        assert_eq!(row.cells[5], "2.7183");
        assert_eq!(row.cells[6], "$4,133.10");
        assert_eq!(row.cells[7], "0.0039");
        assert_eq!(row.cells[8], "");
        assert_eq!(row.cells[9], "($16.14)");
    }

    #[test]
    fn document_from_invoice() {
        let inv = Invoice {
            invoice_id: "7".into(),
            operator: "Ovintiv".into(),
            owner_number: "A-100".into(),
            check_number: "55".into(),
            invoice_date: "2025-11-28".into(),
            op_acct_month: "2025-11-30".into(),
            total_revenue: Some(1200.0),
            total_tax: Some(-84.0),
            total_deductions: None,
            total_amount: Some(1116.0),
            properties: vec![PropertySection {
                description: "SMITH 1H".into(),
                total: Some(1116.0),
                cost_center: None,
                state: Some("TX".into()),
                county: None,
                owner_share_revenue: Some(1200.0),
                tax: Some(-84.0),
                deductions: None,
                details: vec![line(Some("RI")), line(Some("PRODUCTION TAX"))],
            }],
        };

        let doc = InvoiceDocument::from(&inv);
        assert_eq!(doc.summary[0].amount, "$1,200.00");
        assert_eq!(doc.summary[1].amount, "($84.00)");
        assert_eq!(doc.summary[2].amount, "$0.00");
        assert!(doc.summary[3].emphasis);

        let prop = &doc.properties[0];
        assert_eq!(prop.location, "TX, ");
        assert_eq!(prop.cost_center, "");
        assert_eq!(prop.deductions, "$0.00");
        let flags: Vec<bool> = prop.rows.iter().map(|r| r.flagged).collect();
        assert_eq!(flags, vec![false, true]);
    }
}
