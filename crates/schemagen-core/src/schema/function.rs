use super::Type;

/// A SQL-language function created alongside the schema
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,

    /// Ordered arguments
    pub args: Vec<FunctionArg>,

    /// Return type
    pub returns: Type,

    /// Function body, embedded as a single-quoted SQL string.
    pub body: String,

    /// Volatility category. When `None`, PostgreSQL's default applies.
    pub behaviour: Option<FunctionBehaviour>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArg {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionBehaviour {
    Volatile,
    Immutable,
    Stable,
}

impl Function {
    pub fn new(name: impl Into<String>, returns: Type, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![],
            returns,
            body: body.into(),
            behaviour: None,
        }
    }

    pub fn arg(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.args.push(FunctionArg {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn behaviour(mut self, behaviour: FunctionBehaviour) -> Self {
        self.behaviour = Some(behaviour);
        self
    }
}

impl FunctionBehaviour {
    pub fn as_sql(self) -> &'static str {
        match self {
            FunctionBehaviour::Volatile => "VOLATILE",
            FunctionBehaviour::Immutable => "IMMUTABLE",
            FunctionBehaviour::Stable => "STABLE",
        }
    }
}
