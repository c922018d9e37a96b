use crate::{Criteria, Filter, FilterSet, JoinKind, Result, RowOrder, Value};

/// Builds SQL text together with its positional arguments.
///
/// Placeholders are numbered `$1`, `$2`, ... in the order values are bound.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    sql: String,
    args: Vec<Value>,
}

/// A position a [`Composer`] can be rolled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    sql: usize,
    args: usize,
}

/// A list written with a prefix before the first item and a separator
/// between items. Nothing is written when the list stays empty.
#[derive(Debug)]
pub struct Clause<'a> {
    comp: &'a mut Composer,
    prefix: &'static str,
    separator: &'static str,
    wrote: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Writes `alias.column`, or `column` when `alias` is empty.
    pub fn write_column(&mut self, alias: &str, column: &str) {
        if !alias.is_empty() {
            self.sql.push_str(alias);
            self.sql.push('.');
        }
        self.sql.push_str(column);
    }

    pub fn write_columns<S: AsRef<str>>(&mut self, alias: &str, columns: &[S]) {
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.write_column(alias, column.as_ref());
        }
    }

    /// Adds an argument and writes its placeholder.
    pub fn bind(&mut self, value: impl Into<Value>) {
        self.args.push(value.into());
        self.sql.push('$');
        self.sql.push_str(&self.args.len().to_string());
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            sql: self.sql.len(),
            args: self.args.len(),
        }
    }

    /// Discards everything written after `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.sql.truncate(checkpoint.sql);
        self.args.truncate(checkpoint.args);
    }

    pub fn clause(&mut self, prefix: &'static str, separator: &'static str) -> Clause<'_> {
        Clause {
            comp: self,
            prefix,
            separator,
            wrote: false,
        }
    }

    /// Writes ` <kind> table AS alias ON parent.a = alias.b AND ...`,
    /// followed by the extra `on` criteria if any.
    pub fn write_join<F: FilterSet>(
        &mut self,
        kind: JoinKind,
        table: &str,
        alias: &str,
        parent: &str,
        columns: &[(&str, &str)],
        on: Option<&Criteria<F>>,
    ) -> Result<()> {
        self.write_str(" ");
        self.write_str(kind.as_sql());
        self.write_str(" ");
        self.write_str(table);
        self.write_str(" AS ");
        self.write_str(alias);

        let mut clause = self.clause(" ON ", " AND ");
        for (parent_column, column) in columns {
            clause.raw(|comp| {
                comp.write_column(parent, parent_column);
                comp.write_str(" = ");
                comp.write_column(alias, column);
                Ok(true)
            })?;
        }
        clause.criteria(on, alias)?;

        Ok(())
    }

    /// Writes ` ORDER BY ...` when `orders` is not empty. Unqualified columns
    /// are prefixed with `alias`.
    pub fn write_order_by(&mut self, alias: &str, orders: &[RowOrder]) {
        for (i, order) in orders.iter().enumerate() {
            self.write_str(if i == 0 { " ORDER BY " } else { ", " });

            if order.column.contains('.') {
                self.write_str(&order.column);
            } else {
                self.write_column(alias, &order.column);
            }

            self.write_str(" ");
            self.write_str(order.direction());
        }
    }

    /// Writes ` LIMIT $n` and ` OFFSET $n` for positive values.
    pub fn write_limit_offset(&mut self, limit: i64, offset: i64) {
        if limit > 0 {
            self.write_str(" LIMIT ");
            self.bind(limit);
        }

        if offset > 0 {
            self.write_str(" OFFSET ");
            self.bind(offset);
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl Clause<'_> {
    fn begin(&mut self) {
        let s = if self.wrote {
            self.separator
        } else {
            self.prefix
        };
        self.comp.write_str(s);
    }

    /// Adds a condition on a single column.
    pub fn filter<T: Clone + Into<Value>>(&mut self, alias: &str, column: &str, filter: &Filter<T>) {
        self.begin();
        filter.write_sql(self.comp, alias, column);
        self.wrote = true;
    }

    /// Adds a criteria tree. `None` and trees that render nothing are
    /// skipped.
    pub fn criteria<F: FilterSet>(&mut self, criteria: Option<&Criteria<F>>, alias: &str) -> Result<()> {
        let Some(criteria) = criteria else {
            return Ok(());
        };

        self.raw(|comp| criteria.write_sql(comp, alias))
    }

    /// Adds `column = $n`.
    pub fn assign(&mut self, column: &str, value: impl Into<Value>) {
        self.begin();
        self.comp.write_str(column);
        self.comp.write_str(" = ");
        self.comp.bind(value);
        self.wrote = true;
    }

    /// Adds `column = expr` with `expr` written verbatim.
    pub fn assign_raw(&mut self, column: &str, expr: &str) {
        self.begin();
        self.comp.write_str(column);
        self.comp.write_str(" = ");
        self.comp.write_str(expr);
        self.wrote = true;
    }

    /// Adds whatever `f` writes. `f` returns `false` to discard the item.
    pub fn raw(&mut self, f: impl FnOnce(&mut Composer) -> Result<bool>) -> Result<()> {
        let checkpoint = self.comp.checkpoint();
        self.begin();

        if f(&mut *self.comp)? {
            self.wrote = true;
        } else {
            self.comp.rollback(checkpoint);
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        !self.wrote
    }

    /// Ends the clause. Returns `true` if anything was written.
    pub fn finish(self) -> bool {
        self.wrote
    }
}
