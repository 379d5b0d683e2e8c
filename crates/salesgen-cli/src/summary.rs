use std::io::{self, Write};
use std::path::Path;

use salesgen_core::{CUSTOMERS_TABLE, ORDERS_TABLE};
use salesgen_generate::TableCommit;

/// Console progress and the closing summary. Output only; nothing parses it.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn stage_started(&mut self, table: &str) -> io::Result<()> {
        writeln!(self.out, "Generating {table} table …")
    }

    pub fn table_written(&mut self, commit: &TableCommit) -> io::Result<()> {
        let path = commit.path.display();
        if commit.replaced_existing {
            writeln!(self.out, "  Removed existing table at {path}")?;
        }
        writeln!(
            self.out,
            "  Written {} rows → {path}  (version {})",
            format_count(commit.rows),
            commit.version
        )
    }

    pub fn finish(&mut self, output_dir: &Path) -> io::Result<()> {
        let dir = output_dir.display();
        let lines = [
            String::new(),
            "Done! Tables ready for querying.".to_string(),
            String::new(),
            "Example DuckDB queries:".to_string(),
            String::new(),
            "  INSTALL delta; LOAD delta;".to_string(),
            String::new(),
            format!("  CREATE TEMP VIEW {CUSTOMERS_TABLE} AS"),
            format!("    SELECT * FROM delta_scan('{dir}/{CUSTOMERS_TABLE}');"),
            String::new(),
            format!("  CREATE TEMP VIEW {ORDERS_TABLE} AS"),
            format!("    SELECT * FROM delta_scan('{dir}/{ORDERS_TABLE}');"),
            String::new(),
            "  -- Revenue by region and category".to_string(),
            "  SELECT c.region, o.category,".to_string(),
            "         ROUND(SUM(o.revenue), 2) AS total_revenue,".to_string(),
            "         ROUND(SUM(o.profit),  2) AS total_profit".to_string(),
            format!("  FROM {ORDERS_TABLE} o"),
            format!("  JOIN {CUSTOMERS_TABLE} c USING (customer_id)"),
            "  GROUP BY c.region, o.category".to_string(),
            "  ORDER BY total_revenue DESC;".to_string(),
        ];
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

/// `1234567` -> `1,234,567`.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
