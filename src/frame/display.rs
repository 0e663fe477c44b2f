// Console rendering for frames
// Author: Gabriel Demetrios Lafis

use std::fmt;

use super::{DataFrame, NDFrame, Series};

impl fmt::Display for NDFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (n_rows, n_columns) = self.shape();
        let display = self.settings().display;
        let shown_rows = n_rows.min(display.max_rows);
        let shown_columns = n_columns.min(display.max_columns);
        let storage = self.storage();

        // Build the grid as text first so column widths can be measured.
        let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown_rows + 1);
        let mut header = vec![String::new()];
        header.extend(self.column_names()[..shown_columns].iter().cloned());
        if shown_columns < n_columns {
            header.push("...".to_string());
        }
        grid.push(header);

        for i in 0..shown_rows {
            let mut line = vec![self.index()[i].to_string()];
            for column in &storage.columns()[..shown_columns] {
                line.push(column[i].to_string());
            }
            if shown_columns < n_columns {
                line.push("...".to_string());
            }
            grid.push(line);
        }

        let width_count = grid[0].len();
        let widths: Vec<usize> = (0..width_count)
            .map(|j| grid.iter().map(|line| line[j].chars().count()).max().unwrap_or(0))
            .collect();

        for line in &grid {
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>width$}", cell, width = w))
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }
        if shown_rows < n_rows {
            writeln!(f, "...")?;
        }

        write!(f, "[{} rows x {} columns]", n_rows, n_columns)
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = self.settings().display;
        let shown = self.len().min(display.max_rows);
        let labels: Vec<String> = self.index()[..shown].iter().map(|l| l.to_string()).collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (label, value) in labels.iter().zip(self.values()) {
            writeln!(f, "{:<width$}  {}", label, value, width = width)?;
        }
        if shown < self.len() {
            writeln!(f, "...")?;
        }

        write!(f, "Name: {}, Length: {}, dtype: {}", self.name(), self.len(), self.dtype())
    }
}
