use crate::{Error, Result, Rows, Value};

/// A destination for a single column value.
pub trait ScanTarget {
    fn scan(&mut self, value: Value) -> Result<()>;
}

/// A generated entity that can hand out scan targets for its columns.
pub trait Entity: Default {
    /// Scan targets for `cols`, in order.
    fn props<S: AsRef<str>>(&mut self, cols: &[S]) -> Result<Vec<&mut dyn ScanTarget>>;
}

macro_rules! impl_scan_target {
    ( $( $ty:ty: $name:literal => [ $( $variant:ident ),* ], )* ) => {
        $(
            impl ScanTarget for $ty {
                fn scan(&mut self, value: Value) -> Result<()> {
                    match value {
                        $(
                            Value::$variant(v) => {
                                *self = v.into();
                                Ok(())
                            }
                        )*
                        other => Err(Error::Scan {
                            expected: $name,
                            found: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_scan_target! {
    bool: "bool" => [Bool],
    i16: "i16" => [I16],
    i32: "i32" => [I16, I32],
    i64: "i64" => [I16, I32, I64],
    f32: "f32" => [F32],
    f64: "f64" => [F32, F64],
    String: "string" => [String],
    Vec<u8>: "bytes" => [Bytes],
}

impl ScanTarget for Value {
    fn scan(&mut self, value: Value) -> Result<()> {
        *self = value;
        Ok(())
    }
}

impl<T: ScanTarget + Default> ScanTarget for Option<T> {
    fn scan(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        let mut inner = T::default();
        inner.scan(value)?;
        *self = Some(inner);
        Ok(())
    }
}

/// Reads exactly one entity from `rows` and closes them.
pub fn scan_one<T: Entity, S: AsRef<str>>(mut rows: Box<dyn Rows>, cols: &[S]) -> Result<T> {
    if !rows.advance() {
        let err = rows.err().unwrap_or(Error::NoRows);
        rows.close()?;
        return Err(err);
    }

    let mut ent = T::default();
    rows.scan(&mut ent.props(cols)?)?;
    rows.close()?;
    Ok(ent)
}

/// Reads every remaining entity from `rows` and closes them.
pub fn scan_all<T: Entity, S: AsRef<str>>(mut rows: Box<dyn Rows>, cols: &[S]) -> Result<Vec<T>> {
    let mut ents = vec![];

    while rows.advance() {
        let mut ent = T::default();
        rows.scan(&mut ent.props(cols)?)?;
        ents.push(ent);
    }

    if let Some(err) = rows.err() {
        return Err(err);
    }

    rows.close()?;
    Ok(ents)
}

/// Builds an entity from values read through a join.
///
/// Returns `None` when every value is `NULL`, which is what an outer join
/// without a matching row produces.
pub fn scan_joined<T: Entity, S: AsRef<str>>(cols: &[S], values: Vec<Value>) -> Result<Option<T>> {
    if values.iter().all(Value::is_null) {
        return Ok(None);
    }

    let mut ent = T::default();
    let props = ent.props(cols)?;

    if props.len() != values.len() {
        return Err(Error::ColumnCount {
            expected: props.len(),
            found: values.len(),
        });
    }

    for (prop, value) in props.into_iter().zip(values) {
        prop.scan(value)?;
    }

    Ok(Some(ent))
}
