//! GraphQL type literals for variable declarations.

/// The type literal a variable of this Rust type declares, e.g. `Int!`.
///
/// Non-optional types carry the trailing `!`; wrapping in `Option` drops it,
/// and `Vec<T>` declares `[T]!`.
pub trait GraphqlTypeName {
    fn type_name() -> String;
}

macro_rules! impl_type_name {
    ($name:literal => $($ty:ty),* $(,)?) => {
        $(
            impl GraphqlTypeName for $ty {
                fn type_name() -> String {
                    concat!($name, "!").to_owned()
                }
            }
        )*
    };
}

impl_type_name!("Int" => i8, i16, i32, i64, u8, u16, u32, u64);
impl_type_name!("Float" => f32, f64);
impl_type_name!("Boolean" => bool);
impl_type_name!("String" => String, &str);

impl<T: GraphqlTypeName> GraphqlTypeName for Option<T> {
    fn type_name() -> String {
        let full = T::type_name();
        match full.strip_suffix('!') {
            Some(nullable) => nullable.to_owned(),
            None => full,
        }
    }
}

impl<T: GraphqlTypeName> GraphqlTypeName for Vec<T> {
    fn type_name() -> String {
        format!("[{}]!", T::type_name())
    }
}
