//! Bordered table rendering for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Empty row, used to visualize gaps between entries.
    pub fn add_blank_row(&mut self) {
        self.rows.push(vec![String::new(); self.columns.len()]);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Top border spans the full table width, borders included.
        let total: usize = self.columns.iter().map(|c| c.width + 2).sum::<usize>()
            + self.columns.len()
            + 1;
        out.push_str(&"_".repeat(total));
        out.push('\n');

        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!(" {:<w$} ", c.header, w = c.width))
            .collect();
        out.push_str(&format!("|{}|\n", headers.join("|")));

        let sep: Vec<String> = self
            .columns
            .iter()
            .map(|c| "-".repeat(c.width + 2))
            .collect();
        out.push_str(&format!("|{}|\n", sep.join("+")));

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, c)| format!(" {:<w$} ", row[i], w = c.width))
                .collect();
            out.push_str(&format!("|{}|\n", cells.join("|")));
        }

        let bottom: Vec<String> = self
            .columns
            .iter()
            .map(|c| "_".repeat(c.width + 2))
            .collect();
        out.push_str(&format!("|{}|\n", bottom.join("|")));

        out
    }
}
