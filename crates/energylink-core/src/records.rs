//! Response shapes for the royalty API.
//!
//! One struct per endpoint. Numeric columns are optional because the backend
//! emits `null` for ratios over zero volume and for columns it cannot compute.

use serde::{Deserialize, Deserializer, Serialize};

// ── Boundary coercion ─────────────────────────────────────────────────────────

/// Accept identifiers sent either as JSON numbers or strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null(()) => String::new(),
    })
}

/// Accept a nullable text column, treating `null` as empty.
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ── /api/dashboard/filters ───────────────────────────────────────────────────

/// Distinct values for the dashboard filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub all_dates: Vec<String>,
    #[serde(default)]
    pub date_min: Option<String>,
    #[serde(default)]
    pub date_max: Option<String>,
}

impl FilterOptions {
    /// Production months in chronological order, for the start/end selects.
    pub fn sorted_dates(&self) -> Vec<String> {
        crate::months::sorted_months(&self.all_dates)
    }
}

// ── /api/dashboard/monthly ───────────────────────────────────────────────────

/// One production month of aggregated revenue, volume and expenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyRollup {
    #[serde(deserialize_with = "string_or_null")]
    pub production_date: String,
    pub revenue: Option<f64>,
    pub volume: Option<f64>,
    pub avg_price: Option<f64>,
    pub total_expenses: Option<f64>,

    pub gathering_expense: Option<f64>,
    pub processing_expense: Option<f64>,
    pub compression_expense: Option<f64>,
    pub transportation_expense: Option<f64>,
    pub marketing_expense: Option<f64>,
    pub taxes_expense: Option<f64>,
    pub other_expense: Option<f64>,

    pub revenue_per_mcf: Option<f64>,
    pub total_expenses_per_mcf: Option<f64>,
    pub net_per_mcf: Option<f64>,
    pub gathering_per_mcf: Option<f64>,
    pub processing_per_mcf: Option<f64>,
    pub compression_per_mcf: Option<f64>,
    pub transportation_per_mcf: Option<f64>,
    pub marketing_per_mcf: Option<f64>,
    pub taxes_per_mcf: Option<f64>,
    pub other_per_mcf: Option<f64>,
}

// ── /api/dashboard/details ───────────────────────────────────────────────────

/// A single unaggregated statement line underlying the rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailRow {
    #[serde(deserialize_with = "string_or_null")]
    pub production_date: String,
    #[serde(deserialize_with = "string_or_null")]
    pub operator: String,
    #[serde(deserialize_with = "string_or_null")]
    pub property: String,
    #[serde(deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(deserialize_with = "string_or_null")]
    pub type_description: String,
    pub volume: Option<f64>,
    pub price: Option<f64>,
    pub value: Option<f64>,
    pub owner_pct: Option<f64>,
    pub owner_volume: Option<f64>,
    pub owner_value: Option<f64>,
    pub btu: Option<f64>,
}

// ── /api/invoices/ ───────────────────────────────────────────────────────────

/// Invoice header as listed by the invoice picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub invoice_id: String,
    #[serde(deserialize_with = "string_or_null")]
    pub operator: String,
    #[serde(deserialize_with = "string_or_number")]
    pub check_number: String,
    #[serde(deserialize_with = "string_or_null")]
    pub invoice_date: String,
    pub total_amount: Option<f64>,

    pub doc_type: Option<String>,
    pub owner_number: Option<String>,
    pub op_acct_month: Option<String>,
    pub received_date: Option<String>,
    pub status: Option<String>,
    pub total_revenue: Option<f64>,
    pub total_tax: Option<f64>,
    pub total_deductions: Option<f64>,
}

// ── /api/invoices/{id} ───────────────────────────────────────────────────────

/// Full revenue statement with its property sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(deserialize_with = "string_or_number")]
    pub invoice_id: String,
    #[serde(deserialize_with = "string_or_null")]
    pub operator: String,
    #[serde(deserialize_with = "string_or_number")]
    pub owner_number: String,
    #[serde(deserialize_with = "string_or_number")]
    pub check_number: String,
    #[serde(deserialize_with = "string_or_null")]
    pub invoice_date: String,
    #[serde(deserialize_with = "string_or_null")]
    pub op_acct_month: String,
    pub total_revenue: Option<f64>,
    pub total_tax: Option<f64>,
    pub total_deductions: Option<f64>,
    pub total_amount: Option<f64>,
    pub properties: Vec<PropertySection>,
}

/// One property (well / lease) on a statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySection {
    #[serde(deserialize_with = "string_or_null")]
    pub description: String,
    pub total: Option<f64>,
    pub cost_center: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub owner_share_revenue: Option<f64>,
    pub tax: Option<f64>,
    pub deductions: Option<f64>,
    pub details: Vec<DetailLine>,
}

/// A product / interest-type line within a property section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailLine {
    pub product_category: Option<String>,
    pub code: Option<String>,
    pub type_description: Option<String>,
    pub production_date: Option<String>,
    pub property_volume: Option<f64>,
    pub property_price: Option<f64>,
    pub property_value: Option<f64>,
    pub owner_pct: Option<f64>,
    pub owner_volume: Option<f64>,
    pub owner_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_summary_accepts_numeric_ids() {
        let json = r#"{
            "invoice_id": 4412,
            "operator": "Devon Energy",
            "check_number": 110355,
            "invoice_date": "2026-01-30",
            "total_amount": 1523.5,
            "status": "Paid"
        }"#;
        let inv: InvoiceSummary = serde_json::from_str(json).unwrap();
        assert_eq!(inv.invoice_id, "4412");
        assert_eq!(inv.check_number, "110355");
        assert_eq!(inv.total_amount, Some(1523.5));
        assert_eq!(inv.status.as_deref(), Some("Paid"));
        assert_eq!(inv.owner_number, None);
    }

    #[test]
    fn rollup_tolerates_nulls_and_extra_columns() {
        let json = r#"{
            "production_date": "Jan 24",
            "revenue": 812.4,
            "volume": 0,
            "revenue_per_mcf": null,
            "some_future_column": 3
        }"#;
        let row: MonthlyRollup = serde_json::from_str(json).unwrap();
        assert_eq!(row.production_date, "Jan 24");
        assert_eq!(row.volume, Some(0.0));
        assert_eq!(row.revenue_per_mcf, None);
        assert_eq!(row.taxes_per_mcf, None);
    }

    #[test]
    fn invoice_detail_nests_properties() {
        let json = r#"{
            "invoice_id": 7,
            "operator": "Ovintiv",
            "owner_number": "A-100",
            "check_number": "55",
            "invoice_date": "2025-11-28",
            "op_acct_month": "2025-11-30",
            "total_amount": -12.5,
            "properties": [{
                "description": "SMITH 1H",
                "total": 100.0,
                "cost_center": null,
                "details": [{"type_description": "RI", "owner_value": 101.0}]
            }]
        }"#;
        let inv: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(inv.properties.len(), 1);
        assert_eq!(inv.properties[0].cost_center, None);
        assert_eq!(inv.properties[0].details[0].owner_value, Some(101.0));
        assert_eq!(inv.total_tax, None);
    }

    #[test]
    fn serialized_records_decode_again() {
        let inv = InvoiceSummary {
            invoice_id: "9".into(),
            check_number: "12".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&inv).unwrap();
        let back: InvoiceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inv);
    }
}
