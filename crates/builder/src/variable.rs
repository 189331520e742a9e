//! Operation variables.

use std::fmt;

use graphql_value_encoder::{Encodable, EncodeError, ValueEncoder};

use crate::typename::GraphqlTypeName;

/// A named, typed placeholder declared at the operation level and referenced
/// from field arguments as `$key`.
pub struct Variable {
    key: String,
    value: Box<dyn Encodable>,
    graphql_type: String,
}

impl Variable {
    /// Variable with an explicit GraphQL type literal, e.g. `"String!"`.
    pub fn new(
        key: impl Into<String>,
        value: impl Encodable + 'static,
        graphql_type: impl Into<String>,
    ) -> Self {
        Variable {
            key: key.into(),
            value: Box::new(value),
            graphql_type: graphql_type.into(),
        }
    }

    /// Variable whose type literal comes from the value's Rust type.
    pub fn of<T: Encodable + GraphqlTypeName + 'static>(key: impl Into<String>, value: T) -> Self {
        Variable {
            key: key.into(),
            value: Box::new(value),
            graphql_type: T::type_name(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn graphql_type(&self) -> &str {
        &self.graphql_type
    }

    /// Declaration inside an operation's parameter list: `$key:Type`.
    pub fn declaration(&self) -> String {
        format!("${}:{}", self.key, self.graphql_type)
    }

    /// Pretty-form declaration: `$key: Type`.
    pub fn pretty_declaration(&self) -> String {
        format!("${}: {}", self.key, self.graphql_type)
    }
}

/// A variable encodes as the single entry `{key: <value>}`, writing the
/// value through a continuation slot. Several variables encoding into one
/// destination therefore merge into one object.
impl Encodable for Variable {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        let mut slot = keyed.continuation(&self.key);
        self.value.encode(&mut slot)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("key", &self.key)
            .field("graphql_type", &self.graphql_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_value_encoder::TextEncoder;

    #[test]
    fn declarations() {
        let variable = Variable::new("id", 1i64, "ID!");
        assert_eq!(variable.declaration(), "$id:ID!");
        assert_eq!(variable.pretty_declaration(), "$id: ID!");

        let typed = Variable::of("limit", 10i32);
        assert_eq!(typed.declaration(), "$limit:Int!");
    }

    #[test]
    fn encodes_as_a_keyed_entry() {
        let variable = Variable::of("name", "foo".to_owned());
        let text = TextEncoder::new(true, true).encode(&variable).unwrap();
        assert_eq!(text, Some("{\"name\": \"foo\"}".to_owned()));
    }

    #[test]
    fn variables_merge_when_encoded_together() {
        struct Pair(Variable, Variable);
        impl Encodable for Pair {
            fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
                self.0.encode(encoder)?;
                self.1.encode(encoder)
            }
        }

        let pair = Pair(Variable::of("a", 1i64), Variable::of("b", 2i64));
        let text = TextEncoder::new(false, false).encode(&pair).unwrap();
        assert_eq!(text, Some("{a: 1,b: 2}".to_owned()));
    }
}
