use crate::{Composer, Result};

/// A tree of filters combined with `AND` / `OR`.
///
/// Children are rendered in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria<F> {
    Leaf(F),
    Node {
        operator: Operator,
        children: Vec<Criteria<F>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

/// The filter type stored in [`Criteria`] leaves.
///
/// Implemented by every generated `Filter` struct.
pub trait FilterSet {
    /// Writes the conditions of every set field, joined with `AND`. Returns
    /// `false` without writing anything when no field is set.
    fn write_sql(&self, comp: &mut Composer, alias: &str) -> Result<bool>;
}

impl<F> Criteria<F> {
    pub fn leaf(filter: F) -> Self {
        Criteria::Leaf(filter)
    }

    /// Combines `operands` under `operator`.
    pub fn operand(operator: Operator, operands: impl IntoIterator<Item = Criteria<F>>) -> Self {
        Criteria::Node {
            operator,
            children: operands.into_iter().collect(),
        }
    }

    pub fn and(operands: impl IntoIterator<Item = Criteria<F>>) -> Self {
        Self::operand(Operator::And, operands)
    }

    pub fn or(operands: impl IntoIterator<Item = Criteria<F>>) -> Self {
        Self::operand(Operator::Or, operands)
    }

    /// Child criteria. Empty for leaves.
    pub fn children(&self) -> &[Criteria<F>] {
        match self {
            Criteria::Leaf(_) => &[],
            Criteria::Node { children, .. } => children,
        }
    }
}

impl<F> From<F> for Criteria<F> {
    fn from(filter: F) -> Self {
        Criteria::Leaf(filter)
    }
}

impl<F: FilterSet> Criteria<F> {
    /// Writes the tree for a table aliased as `alias`. Nodes are
    /// parenthesized. Returns `false` if nothing was written.
    pub fn write_sql(&self, comp: &mut Composer, alias: &str) -> Result<bool> {
        match self {
            Criteria::Leaf(filter) => filter.write_sql(comp, alias),
            Criteria::Node { operator, children } => {
                let start = comp.checkpoint();
                comp.write_str("(");

                let mut wrote = false;
                for child in children {
                    let checkpoint = comp.checkpoint();
                    if wrote {
                        comp.write_str(operator.as_sql());
                    }

                    if child.write_sql(comp, alias)? {
                        wrote = true;
                    } else {
                        comp.rollback(checkpoint);
                    }
                }

                if !wrote {
                    comp.rollback(start);
                    return Ok(false);
                }

                comp.write_str(")");
                Ok(true)
            }
        }
    }
}

impl Operator {
    /// The operator with surrounding spaces.
    pub fn as_sql(self) -> &'static str {
        match self {
            Operator::And => " AND ",
            Operator::Or => " OR ",
        }
    }
}
