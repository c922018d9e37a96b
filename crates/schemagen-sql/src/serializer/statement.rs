use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateFunction(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateSchema(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateSchema {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(f, "CREATE SCHEMA " if_not_exists self.name.as_str() ";");
    }
}

struct Arg<'a>(&'a (String, String));

impl ToSql for Arg<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let (name, ty) = self.0;
        fmt!(f, name " " ty);
    }
}

impl ToSql for &stmt::CreateFunction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let args = Comma(self.args.iter().map(Arg));

        fmt!(
            f, "CREATE OR REPLACE FUNCTION " self.name.as_str() "(" args ") RETURNS "
            self.returns.as_str() "\n\tAS '" self.body.as_str() "'\n\tLANGUAGE SQL"
        );

        if let Some(behaviour) = self.behaviour {
            fmt!(f, "\n\t" behaviour.as_sql());
        }

        fmt!(f, ";");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let temporary = if self.temporary { "TEMPORARY " } else { "" };
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(f, "CREATE " temporary "TABLE " if_not_exists self.name.as_str() " (\n");

        let has_constraints = !self.constraints.is_empty();

        for (index, column) in self.columns.iter().enumerate() {
            fmt!(f, "\t" column);
            if index < self.columns.len() - 1 || has_constraints {
                fmt!(f, ",");
            }
            fmt!(f, "\n");
        }

        if has_constraints {
            fmt!(f, "\n");
        }

        for (index, constraint) in self.constraints.iter().enumerate() {
            fmt!(f, "\t" constraint);
            if index < self.constraints.len() - 1 {
                fmt!(f, ",");
            }
            fmt!(f, "\n");
        }

        fmt!(f, ");");
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(
            f, "CREATE " unique "INDEX " if_not_exists Ident(&self.name) " ON " self.on.as_str()
            " (" Comma(&self.columns) ")"
        );

        if let Some(predicate) = &self.predicate {
            fmt!(f, " WHERE " predicate);
        }

        fmt!(f, ";");
    }
}
