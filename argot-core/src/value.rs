use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Runtime value a dialect can embed into SQL text as a literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Str(String),
    Blob(Vec<u8>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    Uuid(Uuid),
}

macro_rules! value_from {
    ($variant:ident, $($source:ty),+) => {$(
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                Value::$variant(value.into())
            }
        }
    )+};
}

value_from!(Bool, bool);
value_from!(Int, i8, i16, i32, i64, u8, u16, u32);
value_from!(Float, f32, f64);
value_from!(Decimal, Decimal);
value_from!(Str, &str, String);
value_from!(Blob, &[u8], Vec<u8>);
value_from!(Date, Date);
value_from!(Time, Time);
value_from!(Timestamp, PrimitiveDateTime);
value_from!(Uuid, Uuid);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
