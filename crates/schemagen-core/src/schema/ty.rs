use std::fmt;

/// A column, argument or return type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    SmallInt,
    Integer,
    BigInt,
    SmallSerial,
    Serial,
    BigSerial,
    Real,
    DoublePrecision,

    /// `NUMERIC(precision, scale)`
    Numeric(u16, u16),

    Text,
    Varchar(u32),
    Char(u32),
    Bytea,
    Json,
    Jsonb,
    Uuid,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Interval,

    /// A type mapped to user supplied Rust types.
    Custom(Box<CustomType>),
}

/// A database type with explicit Rust representations per mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomType {
    /// The underlying database type.
    pub sql: Type,

    pub mandatory: Option<TypeRef>,
    pub optional: Option<TypeRef>,
    pub criteria: Option<TypeRef>,
}

/// A reference to a Rust type, together with the `use` path it needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// The type as written in generated source, e.g. `Option<Decimal>`.
    pub name: String,

    /// The path imported for the type, e.g. `rust_decimal::Decimal`.
    pub import: Option<String>,
}

/// The role a Rust type plays in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Value of a `NOT NULL` column.
    Mandatory,

    /// Value that may be absent. Used by nullable entity fields and patches.
    Optional,

    /// Filter field.
    Criteria,
}

impl Type {
    pub fn custom(custom: CustomType) -> Self {
        Type::Custom(Box::new(custom))
    }

    /// True for types backed by an implicit sequence.
    pub fn is_serial(&self) -> bool {
        match self {
            Type::SmallSerial | Type::Serial | Type::BigSerial => true,
            Type::Custom(custom) => custom.sql.is_serial(),
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("BOOL"),
            Type::SmallInt => f.write_str("SMALLINT"),
            Type::Integer => f.write_str("INTEGER"),
            Type::BigInt => f.write_str("BIGINT"),
            Type::SmallSerial => f.write_str("SMALLSERIAL"),
            Type::Serial => f.write_str("SERIAL"),
            Type::BigSerial => f.write_str("BIGSERIAL"),
            Type::Real => f.write_str("REAL"),
            Type::DoublePrecision => f.write_str("DOUBLE PRECISION"),
            Type::Numeric(precision, scale) => write!(f, "NUMERIC({precision},{scale})"),
            Type::Text => f.write_str("TEXT"),
            Type::Varchar(len) => write!(f, "VARCHAR({len})"),
            Type::Char(len) => write!(f, "CHAR({len})"),
            Type::Bytea => f.write_str("BYTEA"),
            Type::Json => f.write_str("JSON"),
            Type::Jsonb => f.write_str("JSONB"),
            Type::Uuid => f.write_str("UUID"),
            Type::Date => f.write_str("DATE"),
            Type::Time => f.write_str("TIME"),
            Type::Timestamp => f.write_str("TIMESTAMP"),
            Type::TimestampTz => f.write_str("TIMESTAMPTZ"),
            Type::Interval => f.write_str("INTERVAL"),
            Type::Custom(custom) => custom.sql.fmt(f),
        }
    }
}

impl CustomType {
    pub fn new(sql: Type) -> Self {
        Self {
            sql,
            mandatory: None,
            optional: None,
            criteria: None,
        }
    }

    pub fn mandatory(mut self, ty: TypeRef) -> Self {
        self.mandatory = Some(ty);
        self
    }

    pub fn optional(mut self, ty: TypeRef) -> Self {
        self.optional = Some(ty);
        self
    }

    pub fn criteria(mut self, ty: TypeRef) -> Self {
        self.criteria = Some(ty);
        self
    }

    /// The Rust type used for `mode`, if one was supplied.
    pub fn type_for(&self, mode: Mode) -> Option<&TypeRef> {
        match mode {
            Mode::Mandatory => self.mandatory.as_ref(),
            Mode::Optional => self.optional.as_ref(),
            Mode::Criteria => self.criteria.as_ref(),
        }
    }

    /// Imports required by every mode, in mode order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        [&self.mandatory, &self.optional, &self.criteria]
            .into_iter()
            .flatten()
            .filter_map(|ty| ty.import.as_deref())
    }
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: None,
        }
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.import = Some(path.into());
        self
    }
}
