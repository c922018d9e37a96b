use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{TableConstraint, TableConstraintKind};

impl ToSql for &TableConstraint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CONSTRAINT " Ident(&self.name));

        match &self.kind {
            TableConstraintKind::PrimaryKey(columns) => {
                fmt!(f, " PRIMARY KEY (" Comma(columns) ")");
            }
            TableConstraintKind::Unique(columns) => {
                fmt!(f, " UNIQUE (" Comma(columns) ")");
            }
            TableConstraintKind::ForeignKey {
                columns,
                references,
                referenced_columns,
                on_delete,
                on_update,
            } => {
                fmt!(
                    f, " FOREIGN KEY (" Comma(columns) ") REFERENCES " references
                    " (" Comma(referenced_columns) ")"
                );

                if let Some(action) = on_delete {
                    fmt!(f, " ON DELETE " action.as_sql());
                }

                if let Some(action) = on_update {
                    fmt!(f, " ON UPDATE " action.as_sql());
                }
            }
            TableConstraintKind::Check(expr) => {
                fmt!(f, " CHECK (" expr ")");
            }
        }
    }
}
