use crate::{util, Generator};

use schemagen_core::{
    schema::{Column, Mode, Type},
    Result,
};

use proc_macro2::TokenStream;
use quote::quote;

impl Generator {
    /// The Rust type of `column` in `mode`, or `None` if it has none.
    ///
    /// Plugins are asked first, then custom type mappings, then the built-in
    /// table.
    pub(crate) fn column_type(&self, column: &Column, mode: Mode) -> Result<Option<TokenStream>> {
        for plugin in &self.plugins {
            if let Some(ty) = plugin.property_type(column, mode) {
                return util::parse_type(&ty).map(Some);
            }
        }

        if let Type::Custom(custom) = &column.ty {
            return custom
                .type_for(mode)
                .map(|ty| util::parse_type(&ty.name))
                .transpose();
        }

        let Some(base) = builtin(&column.ty) else {
            return Ok(None);
        };

        Ok(match mode {
            Mode::Mandatory => Some(base),
            Mode::Optional => Some(quote!(Option<#base>)),
            Mode::Criteria if is_comparable(&column.ty) => Some(quote!(Option<Filter<#base>>)),
            Mode::Criteria => None,
        })
    }

    /// Whether `column` gets an entity field.
    pub(crate) fn has_type(&self, column: &Column) -> bool {
        // Errors surface later, when the type is rendered.
        self.column_type(column, column.mode())
            .map(|ty| ty.is_some())
            .unwrap_or(true)
    }
}

fn builtin(ty: &Type) -> Option<TokenStream> {
    Some(match ty {
        Type::Bool => quote!(bool),
        Type::SmallInt | Type::SmallSerial => quote!(i16),
        Type::Integer | Type::Serial => quote!(i32),
        Type::BigInt | Type::BigSerial => quote!(i64),
        Type::Real => quote!(f32),
        Type::DoublePrecision => quote!(f64),
        Type::Bytea => quote!(Vec<u8>),
        Type::Numeric(..)
        | Type::Text
        | Type::Varchar(_)
        | Type::Char(_)
        | Type::Json
        | Type::Jsonb
        | Type::Uuid
        | Type::Date
        | Type::Time
        | Type::Timestamp
        | Type::TimestampTz
        | Type::Interval => quote!(String),
        Type::Custom(_) => return None,
    })
}

fn is_comparable(ty: &Type) -> bool {
    !matches!(ty, Type::Json | Type::Jsonb | Type::Bytea)
}
