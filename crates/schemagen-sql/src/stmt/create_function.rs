use super::Statement;

use schemagen_core::{
    schema::{Function, FunctionBehaviour},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFunction {
    pub name: String,

    /// Argument names paired with their SQL types
    pub args: Vec<(String, String)>,

    pub returns: String,

    pub body: String,

    pub behaviour: Option<FunctionBehaviour>,
}

impl Statement {
    pub fn create_function(function: &Function) -> Result<Self> {
        if function.name.is_empty() {
            return Err(Error::invalid_schema("missing function name"));
        }

        Ok(CreateFunction {
            name: function.name.clone(),
            args: function
                .args
                .iter()
                .map(|arg| (arg.name.clone(), arg.ty.to_string()))
                .collect(),
            returns: function.returns.to_string(),
            body: function.body.clone(),
            behaviour: function.behaviour,
        }
        .into())
    }
}

impl From<CreateFunction> for Statement {
    fn from(value: CreateFunction) -> Self {
        Self::CreateFunction(value)
    }
}
