use crate::{Composer, Value};

/// A condition on a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<T> {
    Eq(T),
    NotEq(T),
    Gt(T),
    Gte(T),
    Lt(T),
    Lte(T),

    /// Matches any of the values. An empty list matches nothing.
    In(Vec<T>),

    IsNull,
    IsNotNull,
}

impl<T: Clone + Into<Value>> Filter<T> {
    /// Writes the condition on `alias.column`.
    pub fn write_sql(&self, comp: &mut Composer, alias: &str, column: &str) {
        let (op, value) = match self {
            Filter::Eq(value) => (" = ", value),
            Filter::NotEq(value) => (" <> ", value),
            Filter::Gt(value) => (" > ", value),
            Filter::Gte(value) => (" >= ", value),
            Filter::Lt(value) => (" < ", value),
            Filter::Lte(value) => (" <= ", value),
            Filter::In(values) if values.is_empty() => {
                comp.write_str("FALSE");
                return;
            }
            Filter::In(values) => {
                comp.write_column(alias, column);
                comp.write_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        comp.write_str(", ");
                    }
                    comp.bind(value.clone());
                }
                comp.write_str(")");
                return;
            }
            Filter::IsNull => {
                comp.write_column(alias, column);
                comp.write_str(" IS NULL");
                return;
            }
            Filter::IsNotNull => {
                comp.write_column(alias, column);
                comp.write_str(" IS NOT NULL");
                return;
            }
        };

        comp.write_column(alias, column);
        comp.write_str(op);
        comp.bind(value.clone());
    }
}
