//! # JSON Inference
//!
//! Converts typed runtime values into [`JsonValue`] trees through a
//! closed family of converters: one [`ToJson`] impl per supported
//! shape, composed by trait-method dispatch. A shape outside the
//! family is a compile-time error at the call site; the one runtime
//! failure arm is [`Error::UnsupportedType`], raised for values with
//! no JSON representation (non-finite floats).
//!
//! Supported shapes:
//!
//! - `Option<T>` — absence becomes `null`
//! - `String` / `&str`
//! - fixed-width integers (`i8`..`i64`, `u8`..`u32`) and floats
//! - `bool`
//! - enumerated values — a manual impl mapping each variant to its
//!   name (see the module tests for the pattern)
//! - `Vec<T>` / slices of supported values
//! - string-keyed `IndexMap` / `BTreeMap` of supported values
//! - records — a manual impl listing fields in declaration order
//!
//! `HashMap` deliberately has no impl: its iteration order would make
//! object entry order nondeterministic. Maps with non-string keys do
//! not implement the trait at all.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::json::{JsonValue, Number};

/// Conversion of a runtime value into a JSON tree.
pub trait ToJson {
    /// Build the JSON tree for this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] when the value has no JSON
    /// representation.
    fn to_json(&self) -> Result<JsonValue>;
}

impl ToJson for JsonValue {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(self.clone())
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Result<JsonValue> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(JsonValue::Null),
        }
    }
}

impl ToJson for String {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::String(self.clone()))
    }
}

impl ToJson for str {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::String(self.to_string()))
    }
}

impl ToJson for &str {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::String((*self).to_string()))
    }
}

macro_rules! impl_to_json_int {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> Result<JsonValue> {
                    Ok(JsonValue::Number(Number::Int(i64::from(*self))))
                }
            }
        )*
    };
}

impl_to_json_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_to_json_float {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> Result<JsonValue> {
                    let value = f64::from(*self);
                    if value.is_finite() {
                        Ok(JsonValue::Number(Number::Float(value)))
                    } else {
                        Err(Error::UnsupportedType {
                            type_name: format!("{} (non-finite)", stringify!($ty)),
                        })
                    }
                }
            }
        )*
    };
}

impl_to_json_float!(f32, f64);

impl ToJson for bool {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::Bool(*self))
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> Result<JsonValue> {
        let elements: Result<Vec<JsonValue>> = self.iter().map(ToJson::to_json).collect();
        Ok(JsonValue::Array(elements?))
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Result<JsonValue> {
        self.as_slice().to_json()
    }
}

impl<T: ToJson> ToJson for IndexMap<String, T> {
    fn to_json(&self) -> Result<JsonValue> {
        let entries: Result<Vec<(String, JsonValue)>> = self
            .iter()
            .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
            .collect();
        Ok(JsonValue::Object(entries?))
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> Result<JsonValue> {
        let entries: Result<Vec<(String, JsonValue)>> = self
            .iter()
            .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
            .collect();
        Ok(JsonValue::Object(entries?))
    }
}
