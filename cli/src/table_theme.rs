use tabled::{
    settings::{
        format::Format,
        object::{Columns, Rows},
        Alignment, Modify, Style,
    },
    Table,
};

/// Centralized table theme configuration for consistent kubectl-like output
pub struct TableTheme;

impl TableTheme {
    /// Apply the default theme to a table - kubectl-like clean style with curved borders
    pub fn apply_default(mut table: Table) -> Table {
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Format::content(|s| s.to_uppercase())))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));
        table
    }
}
