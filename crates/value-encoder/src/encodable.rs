//! [`Encodable`] implementations for standard types and wrapper values.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::encoder::{Encodable, ValueEncoder};
use crate::error::EncodeError;

// ── Scalars ────────────────────────────────────────────────────────────────

macro_rules! impl_encodable_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encodable for $ty {
                fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
                    encoder.as_single_value().write_int(i64::from(*self));
                    Ok(())
                }
            }
        )*
    };
}

impl_encodable_int!(i8, i16, i32, i64, u8, u16, u32);

impl Encodable for u64 {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.as_single_value().write_uint(*self);
        Ok(())
    }
}

impl Encodable for f64 {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.as_single_value().write_float(*self);
        Ok(())
    }
}

impl Encodable for f32 {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        // Keep the f32 shortest-round-trip text instead of widening to f64,
        // which would change e.g. 0.1 into 0.10000000149011612.
        encoder
            .as_single_value()
            .write_unquoted_str(&self.to_string());
        Ok(())
    }
}

impl Encodable for bool {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.as_single_value().write_bool(*self);
        Ok(())
    }
}

impl Encodable for str {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.as_single_value().write_str(self);
        Ok(())
    }
}

impl Encodable for String {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        self.as_str().encode(encoder)
    }
}

// ── Containers ─────────────────────────────────────────────────────────────

impl<T: Encodable> Encodable for Option<T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        match self {
            Some(value) => value.encode(encoder),
            None => {
                encoder.as_single_value().write_nil();
                Ok(())
            }
        }
    }
}

impl<T: Encodable> Encodable for [T] {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut seq = encoder.as_seq();
        for item in self {
            seq.push_value(item)?;
        }
        Ok(())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Encodable> Encodable for BTreeMap<String, T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        for (key, value) in self {
            keyed.write_value(key, value)?;
        }
        Ok(())
    }
}

impl<T: Encodable> Encodable for IndexMap<String, T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        for (key, value) in self {
            keyed.write_value(key, value)?;
        }
        Ok(())
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        (**self).encode(encoder)
    }
}

impl<T: Encodable + ?Sized> Encodable for Box<T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        (**self).encode(encoder)
    }
}

// ── JSON interop ───────────────────────────────────────────────────────────

impl Encodable for serde_json::Value {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        match self {
            serde_json::Value::Null => encoder.as_single_value().write_nil(),
            serde_json::Value::Bool(value) => encoder.as_single_value().write_bool(*value),
            serde_json::Value::Number(number) => {
                let mut single = encoder.as_single_value();
                if let Some(int) = number.as_i64() {
                    single.write_int(int);
                } else if let Some(uint) = number.as_u64() {
                    single.write_uint(uint);
                } else if let Some(float) = number.as_f64() {
                    single.write_float(float);
                } else {
                    single.write_unquoted_str(&number.to_string());
                }
            }
            serde_json::Value::String(value) => encoder.as_single_value().write_str(value),
            serde_json::Value::Array(items) => {
                let mut seq = encoder.as_seq();
                for item in items {
                    seq.push_value(item)?;
                }
            }
            serde_json::Value::Object(entries) => {
                let mut keyed = encoder.as_keyed();
                for (key, value) in entries {
                    keyed.write_value(key, value)?;
                }
            }
        }
        Ok(())
    }
}

// ── Wrappers ───────────────────────────────────────────────────────────────

/// A string written without surrounding quotes (still escape-processed).
/// Useful for enum literals and other bare GraphQL tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unquoted<S>(pub S);

impl<S: AsRef<str>> Encodable for Unquoted<S> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.as_single_value().write_unquoted_str(self.0.as_ref());
        Ok(())
    }
}

/// An already-final fragment of output, inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLiteral(pub String);

impl Encodable for RawLiteral {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        encoder.write_raw(self.0.clone());
        Ok(())
    }
}

/// A present value, or the literal token `null`.
///
/// Distinct from `Option`: under a renderer that drops nils, a `None`
/// disappears from the output while `OrNull::Null` still prints `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrNull<T> {
    Value(T),
    Null,
}

impl<T: Encodable> Encodable for OrNull<T> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        match self {
            OrNull::Value(value) => value.encode(encoder),
            OrNull::Null => {
                encoder.write_raw("null");
                Ok(())
            }
        }
    }
}

/// Lift an `Option` into [`OrNull`].
pub fn or_null<T: Encodable>(value: Option<T>) -> OrNull<T> {
    match value {
        Some(value) => OrNull::Value(value),
        None => OrNull::Null,
    }
}
