use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name.as_str() " " self.ty.as_str());

        if let Some(collate) = &self.collate {
            fmt!(f, " " collate);
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }
    }
}
