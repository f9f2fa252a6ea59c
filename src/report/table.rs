//! On-screen table with costs rounded to cents

use crate::projection::ProjectionResult;

/// Text cells ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    /// Month and users stay integral; every cost column is shown to 2 decimals
    pub fn from_result(result: &ProjectionResult) -> Self {
        let rows = result
            .records
            .iter()
            .map(|record| {
                let mut row = Vec::with_capacity(record.tier_costs.len() + 3);
                row.push(record.month.to_string());
                row.push(record.projected_users.to_string());
                row.extend(record.tier_costs.iter().map(|cost| format!("{cost:.2}")));
                row.push(format!("{:.2}", record.total_cost));
                row
            })
            .collect();

        Self { headers: result.headers(), rows }
    }

    /// Right-aligned columns separated by two spaces, header underlined
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
