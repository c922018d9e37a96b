use schemagen_core::{
    schema::{Column, Mode},
    Schema,
};

/// Extends the generated source.
///
/// Hooks return Rust source text. Returning `None` keeps the default
/// behaviour. Plugins are consulted in registration order and the first
/// answer wins.
pub trait Plugin {
    /// The Rust type of `column` in `mode`.
    fn property_type(&self, column: &Column, mode: Mode) -> Option<String> {
        let _ = (column, mode);
        None
    }

    /// Statements rendering a filter field of `column`.
    ///
    /// In scope: `self` (the filter struct), `clause` (a runtime `Clause`)
    /// and `alias` (the table alias).
    fn where_clause(&self, column: &Column) -> Option<String> {
        let _ = column;
        None
    }

    /// Statements applying a patch field of `column`.
    ///
    /// In scope: `patch` (the patch struct) and `set` (a runtime `Clause`).
    fn set_clause(&self, column: &Column) -> Option<String> {
        let _ = column;
        None
    }

    /// Items appended to the generated module.
    fn statics(&self, schema: &Schema) -> Option<String> {
        let _ = schema;
        None
    }
}
