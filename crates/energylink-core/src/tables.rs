//! Column layouts for the rollup and raw-detail tables.

use crate::fmt::{dollar, fixed, number};
use crate::records::{DetailRow, MonthlyRollup};

pub const ROLLUP_HEADERS: [&str; 12] = [
    "Month",
    "Revenue",
    "Volume (MCF)",
    "Rev $/MCF",
    "Avg Price",
    "Gather $/MCF",
    "Process $/MCF",
    "Compr $/MCF",
    "Trans $/MCF",
    "Tax $/MCF",
    "Tot Exp $/MCF",
    "Net $/MCF",
];

pub fn rollup_cells(row: &MonthlyRollup) -> [String; 12] {
    [
        row.production_date.clone(),
        dollar(row.revenue),
        number(row.volume),
        dollar(row.revenue_per_mcf),
        dollar(row.avg_price),
        dollar(row.gathering_per_mcf),
        dollar(row.processing_per_mcf),
        dollar(row.compression_per_mcf),
        dollar(row.transportation_per_mcf),
        dollar(row.taxes_per_mcf),
        dollar(row.total_expenses_per_mcf),
        dollar(row.net_per_mcf),
    ]
}

pub const RAW_HEADERS: [&str; 12] = [
    "Month",
    "Operator",
    "Property",
    "Category",
    "Code",
    "Type",
    "Volume",
    "Price",
    "Value",
    "Owner %",
    "Owner Vol",
    "Owner Value",
];

pub fn raw_cells(row: &DetailRow) -> [String; 12] {
    [
        row.production_date.clone(),
        row.operator.clone(),
        row.property.clone(),
        row.category.clone(),
        row.code.clone(),
        row.type_description.clone(),
        number(row.volume),
        dollar(row.price),
        dollar(row.value),
        fixed(row.owner_pct, 4),
        number(row.owner_volume),
        dollar(row.owner_value),
    ]
}

/// Rows per page in the raw-detail table.
pub const RAW_PAGE_SIZE: usize = 25;

/// Number of pages needed for `rows` entries (at least one).
pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

/// The slice of `rows` shown on zero-based `page`, clamped to the last page.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = page.min(page_count(rows.len(), page_size) - 1);
    let start = (page * page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollup_row_formatting() {
        let row = MonthlyRollup {
            production_date: "Feb 24".into(),
            revenue: Some(15234.5),
            volume: Some(4120.0),
            revenue_per_mcf: Some(3.6977),
            net_per_mcf: None,
            ..Default::default()
        };
        let cells = rollup_cells(&row);
        assert_eq!(cells[0], "Feb 24");
        assert_eq!(cells[1], "$15,234.50");
        assert_eq!(cells[2], "4,120.00");
        assert_eq!(cells[3], "$3.70");
        assert_eq!(cells[11], "");
    }

    #[test]
    fn raw_row_formatting() {
        let row = DetailRow {
            production_date: "Jan 24".into(),
            operator: "Devon".into(),
            type_description: "RI".into(),
            owner_pct: Some(0.00390625),
            owner_value: Some(-3.1),
            ..Default::default()
        };
        let cells = raw_cells(&row);
        assert_eq!(cells[1], "Devon");
        assert_eq!(cells[9], "0.0039");
        assert_eq!(cells[11], "$-3.10");
        assert_eq!(cells[6], "");
    }

    #[test]
    fn paging_clamps() {
        let rows: Vec<u32> = (0..60).collect();
        assert_eq!(page_count(rows.len(), RAW_PAGE_SIZE), 3);
        assert_eq!(page_slice(&rows, 0, RAW_PAGE_SIZE).len(), 25);
        assert_eq!(page_slice(&rows, 2, RAW_PAGE_SIZE), &rows[50..60]);
        assert_eq!(page_slice(&rows, 9, RAW_PAGE_SIZE), &rows[50..60]);
        assert_eq!(page_count(0, RAW_PAGE_SIZE), 1);
        assert!(page_slice::<u32>(&[], 0, RAW_PAGE_SIZE).is_empty());
    }
}
