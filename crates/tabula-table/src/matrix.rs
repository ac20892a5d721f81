use crate::model::Table;

/// Column-major grid of cell values: one inner vector per column.
pub type ValueGrid = Vec<Vec<String>>;

impl Table {
    /// Flatten the table into a generic value grid.
    ///
    /// Each column becomes one inner vector: its name first when
    /// `include_headers` is set, then its values in row order.
    #[must_use]
    pub fn to_value_grid(&self, include_headers: bool) -> ValueGrid {
        self.columns()
            .iter()
            .map(|column| {
                let mut values = Vec::with_capacity(column.row_count() + 1);
                if include_headers {
                    values.push(column.name.clone());
                }
                values.extend(column.rows.iter().cloned());
                values
            })
            .collect()
    }
}
