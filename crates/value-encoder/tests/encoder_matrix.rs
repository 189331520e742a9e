use indexmap::IndexMap;
use serde_json::json;

use graphql_value_encoder::{
    encode_to_node, or_null, Encodable, EncodeError, RawLiteral, TextEncoder, Unquoted, ValueEncoder,
    ValueNode,
};

// ── Tree-building helpers ──────────────────────────────────────────────────

fn keyed(entries: &[(&str, ValueNode)]) -> ValueNode {
    let mut map = IndexMap::new();
    for (key, value) in entries {
        map.insert((*key).to_owned(), value.clone());
    }
    ValueNode::Keyed(map)
}

fn seq(items: Vec<ValueNode>) -> ValueNode {
    ValueNode::Seq(items)
}

fn lit(text: &str) -> ValueNode {
    ValueNode::Single(Some(text.to_owned()))
}

fn quoted(text: &str) -> ValueNode {
    ValueNode::Single(Some(format!("\"{text}\"")))
}

fn nil() -> ValueNode {
    ValueNode::Single(None)
}

fn delegated(target: ValueNode) -> ValueNode {
    ValueNode::Delegated(Box::new(Some(target)))
}

fn plain_text<T: Encodable + ?Sized>(value: &T) -> Option<String> {
    TextEncoder::new(false, false).encode(value).expect("encode")
}

fn json_text<T: Encodable + ?Sized>(value: &T) -> Option<String> {
    TextEncoder::new(true, true).encode(value).expect("encode")
}

// ── Single-value encoding ──────────────────────────────────────────────────

#[test]
fn scalar_single_value_matrix() {
    assert_eq!(encode_to_node(&1i64).unwrap(), Some(lit("1")));
    assert_eq!(encode_to_node(&3.14f64).unwrap(), Some(lit("3.14")));
    assert_eq!(encode_to_node(&0.5f32).unwrap(), Some(lit("0.5")));
    assert_eq!(encode_to_node(&true).unwrap(), Some(lit("true")));
    assert_eq!(encode_to_node(&"foo").unwrap(), Some(quoted("foo")));
    assert_eq!(encode_to_node(&Some(12i32)).unwrap(), Some(lit("12")));
    assert_eq!(encode_to_node(&None::<i32>).unwrap(), Some(nil()));
    assert_eq!(encode_to_node(&u64::MAX).unwrap(), Some(lit("18446744073709551615")));
}

#[test]
fn unquoted_and_raw_wrappers() {
    assert_eq!(
        encode_to_node(&Unquoted("foo bar")).unwrap(),
        Some(lit("foo bar"))
    );
    // Unquoted still escape-processes; raw does not.
    assert_eq!(
        encode_to_node(&Unquoted("a\"b")).unwrap(),
        Some(lit("a\\\"b"))
    );
    assert_eq!(
        encode_to_node(&RawLiteral("a\"b".to_owned())).unwrap(),
        Some(ValueNode::Raw("a\"b".to_owned()))
    );
}

#[test]
fn or_null_prints_null_even_when_nils_are_dropped() {
    assert_eq!(plain_text(&or_null(Some(5i64))), Some("5".to_owned()));
    assert_eq!(plain_text(&or_null(None::<i64>)), Some("null".to_owned()));
    // A plain Option is dropped under the same configuration.
    assert_eq!(plain_text(&None::<i64>), None);
}

// ── Sequence encoding ──────────────────────────────────────────────────────

#[test]
fn primitive_sequence() {
    let value = vec![1i64, 2, 3, 4, 5];
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(seq(vec![lit("1"), lit("2"), lit("3"), lit("4"), lit("5")]))
    );
}

#[test]
fn optional_sequence_keeps_positions() {
    let value = vec![Some("1"), Some("2"), None, None, Some("5")];
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(seq(vec![
            quoted("1"),
            quoted("2"),
            nil(),
            nil(),
            quoted("5"),
        ]))
    );
    // Placeholders survive both render configurations.
    assert_eq!(
        plain_text(&value),
        Some("[\"1\",\"2\",null,null,\"5\"]".to_owned())
    );
    assert_eq!(
        json_text(&value),
        Some("[\"1\",\"2\",null,null,\"5\"]".to_owned())
    );
}

struct MixedSeq;

impl Encodable for MixedSeq {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut outer = encoder.as_seq();
        outer.push_str("first");
        outer.push_nil();
        let mut inner = outer.nested_keyed();
        inner.write_str("second", "second");
        inner.write_nil("third");
        inner.write_str("fourth", "fourth");
        outer.push_int(9);
        Ok(())
    }
}

#[test]
fn sequence_with_nested_keyed_node() {
    assert_eq!(
        encode_to_node(&MixedSeq).unwrap(),
        Some(seq(vec![
            quoted("first"),
            nil(),
            keyed(&[
                ("second", quoted("second")),
                ("third", nil()),
                ("fourth", quoted("fourth")),
            ]),
            lit("9"),
        ]))
    );
}

struct EmptyElements;

impl Encodable for EmptyElements {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        struct Silent;
        impl Encodable for Silent {
            fn encode(&self, _encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
                Ok(())
            }
        }
        let mut items = encoder.as_seq();
        items.push_int(1);
        items.push_value(&Silent)?;
        items.push_int(2);
        Ok(())
    }
}

#[test]
fn nested_value_writing_nothing_still_occupies_its_sequence_slot() {
    assert_eq!(
        plain_text(&EmptyElements),
        Some("[1,null,2]".to_owned())
    );
}

// ── Keyed encoding ─────────────────────────────────────────────────────────

struct Listing {
    id: i64,
    name: String,
    price: f64,
    is_active: bool,
}

impl Encodable for Listing {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        keyed.write_int("id", self.id);
        keyed.write_str("name", &self.name);
        keyed.write_float("price", self.price);
        keyed.write_bool("isActive", self.is_active);
        Ok(())
    }
}

#[test]
fn keyed_primitives() {
    let value = Listing {
        id: 1,
        name: "2".to_owned(),
        price: 3.14,
        is_active: false,
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[
            ("id", lit("1")),
            ("name", quoted("2")),
            ("price", lit("3.14")),
            ("isActive", lit("false")),
        ]))
    );
}

struct Profile {
    id: Option<i64>,
    name: Option<String>,
    skip_missing: bool,
}

impl Encodable for Profile {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        if self.skip_missing {
            if let Some(id) = self.id {
                keyed.write_int("id", id);
            }
            if let Some(name) = &self.name {
                keyed.write_str("name", name);
            }
        } else {
            keyed.write_value("id", &self.id)?;
            keyed.write_value("name", &self.name)?;
        }
        Ok(())
    }
}

#[test]
fn required_optionals_become_explicit_nils() {
    let value = Profile {
        id: Some(1),
        name: None,
        skip_missing: false,
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[("id", lit("1")), ("name", nil())]))
    );
    assert_eq!(json_text(&value), Some("{\"id\": 1,\"name\": null}".to_owned()));
    assert_eq!(plain_text(&value), Some("{id: 1}".to_owned()));
}

#[test]
fn skipped_optionals_never_reach_the_tree() {
    let value = Profile {
        id: Some(1),
        name: None,
        skip_missing: true,
    };
    assert_eq!(encode_to_node(&value).unwrap(), Some(keyed(&[("id", lit("1"))])));
    assert_eq!(json_text(&value), Some("{\"id\": 1}".to_owned()));
}

struct Account {
    id: i64,
    name: String,
    age: i64,
    phone: Option<String>,
}

impl Encodable for Account {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut root = encoder.as_keyed();
        root.write_int("id", self.id);
        let mut info = root.nested_keyed("info");
        let mut personal = info.nested_keyed("personal");
        personal.write_str("name", &self.name);
        personal.write_int("age", self.age);
        personal.write_value("phone", &self.phone)?;
        Ok(())
    }
}

#[test]
fn nested_keyed_inside_keyed() {
    let value = Account {
        id: 1,
        name: "foo".to_owned(),
        age: 21,
        phone: Some("+380991111111".to_owned()),
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[
            ("id", lit("1")),
            (
                "info",
                keyed(&[(
                    "personal",
                    keyed(&[
                        ("name", quoted("foo")),
                        ("age", lit("21")),
                        ("phone", quoted("+380991111111")),
                    ]),
                )]),
            ),
        ]))
    );
}

struct TreeEntity {
    id: i64,
    name: Option<String>,
    parent: Option<Box<TreeEntity>>,
    children: Vec<Option<TreeEntity>>,
}

impl Encodable for TreeEntity {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        keyed.write_int("id", self.id);
        keyed.write_value("name", &self.name)?;
        keyed.write_value("parent", &self.parent)?;
        keyed.write_value("children", &self.children)?;
        Ok(())
    }
}

#[test]
fn recursive_keyed_structure() {
    let value = TreeEntity {
        id: 1,
        name: Some("Root".to_owned()),
        parent: None,
        children: vec![
            Some(TreeEntity {
                id: 2,
                name: Some("Second".to_owned()),
                parent: Some(Box::new(TreeEntity {
                    id: 1,
                    name: Some("Root".to_owned()),
                    parent: None,
                    children: vec![],
                })),
                children: vec![],
            }),
            None,
        ],
    };

    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[
            ("id", lit("1")),
            ("name", quoted("Root")),
            ("parent", nil()),
            (
                "children",
                seq(vec![
                    keyed(&[
                        ("id", lit("2")),
                        ("name", quoted("Second")),
                        (
                            "parent",
                            keyed(&[
                                ("id", lit("1")),
                                ("name", quoted("Root")),
                                ("parent", nil()),
                                ("children", seq(vec![])),
                            ]),
                        ),
                        ("children", seq(vec![])),
                    ]),
                    nil(),
                ]),
            ),
        ]))
    );
}

// ── Continuation / delegated encoding ──────────────────────────────────────

struct BaseDetails {
    name: String,
    age: i64,
}

impl Encodable for BaseDetails {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        keyed.write_str("name", &self.name);
        keyed.write_int("age", self.age);
        Ok(())
    }
}

struct DerivedDetails {
    base: BaseDetails,
    phone: String,
    via_continuation: bool,
}

impl Encodable for DerivedDetails {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        {
            let mut keyed = encoder.as_keyed();
            keyed.write_str("phone", &self.phone);
            if self.via_continuation {
                let mut parent = keyed.continuation("parent");
                return self.base.encode(&mut parent);
            }
        }
        // Re-requesting the keyed container merges the base fields inline.
        self.base.encode(encoder)
    }
}

#[test]
fn continuation_at_a_key_nests_the_delegate() {
    let value = DerivedDetails {
        base: BaseDetails {
            name: "name".to_owned(),
            age: 21,
        },
        phone: "phone".to_owned(),
        via_continuation: true,
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[
            ("phone", quoted("phone")),
            (
                "parent",
                delegated(keyed(&[("name", quoted("name")), ("age", lit("21"))])),
            ),
        ]))
    );
    assert_eq!(
        plain_text(&value),
        Some("{phone: \"phone\",parent: {name: \"name\",age: 21}}".to_owned())
    );
}

#[test]
fn top_level_delegation_splices_inline() {
    let value = DerivedDetails {
        base: BaseDetails {
            name: "name".to_owned(),
            age: 21,
        },
        phone: "phone".to_owned(),
        via_continuation: false,
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(keyed(&[
            ("phone", quoted("phone")),
            ("name", quoted("name")),
            ("age", lit("21")),
        ]))
    );
}

struct SeqWithSuper {
    base: Vec<String>,
    extra: String,
}

impl Encodable for SeqWithSuper {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut items = encoder.as_seq();
        items.push_str(&self.extra);
        let mut base_slot = items.continuation();
        self.base.encode(&mut base_slot)
    }
}

#[test]
fn sequence_continuation_appends_the_delegate() {
    let value = SeqWithSuper {
        base: vec!["first".to_owned(), "second".to_owned()],
        extra: "third".to_owned(),
    };
    assert_eq!(
        encode_to_node(&value).unwrap(),
        Some(seq(vec![
            quoted("third"),
            delegated(seq(vec![quoted("first"), quoted("second")])),
        ]))
    );
    assert_eq!(
        plain_text(&value),
        Some("[\"third\",[\"first\",\"second\"]]".to_owned())
    );
}

struct AbandonedContinuation;

impl Encodable for AbandonedContinuation {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        keyed.write_int("kept", 1);
        let _ = keyed.continuation("ghost");
        Ok(())
    }
}

#[test]
fn unresolved_continuation_key_is_dropped() {
    assert_eq!(json_text(&AbandonedContinuation), Some("{\"kept\": 1}".to_owned()));
}

// ── Empty container states ─────────────────────────────────────────────────

enum EmptyStrategy {
    Single,
    Seq,
    Keyed,
    Nothing,
}

impl Encodable for EmptyStrategy {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        match self {
            EmptyStrategy::Single => {
                encoder.as_single_value();
            }
            EmptyStrategy::Seq => {
                encoder.as_seq();
            }
            EmptyStrategy::Keyed => {
                encoder.as_keyed();
            }
            EmptyStrategy::Nothing => {}
        }
        Ok(())
    }
}

#[test]
fn empty_container_matrix() {
    assert_eq!(
        encode_to_node(&EmptyStrategy::Single).unwrap(),
        Some(ValueNode::single())
    );
    assert_eq!(
        encode_to_node(&EmptyStrategy::Seq).unwrap(),
        Some(ValueNode::seq())
    );
    assert_eq!(
        encode_to_node(&EmptyStrategy::Keyed).unwrap(),
        Some(ValueNode::keyed())
    );
    assert_eq!(encode_to_node(&EmptyStrategy::Nothing).unwrap(), None);

    assert_eq!(plain_text(&EmptyStrategy::Single), None);
    assert_eq!(json_text(&EmptyStrategy::Single), Some("null".to_owned()));
    assert_eq!(plain_text(&EmptyStrategy::Seq), Some("[]".to_owned()));
    assert_eq!(plain_text(&EmptyStrategy::Keyed), Some("{}".to_owned()));
    assert_eq!(plain_text(&EmptyStrategy::Nothing), None);
    assert_eq!(json_text(&EmptyStrategy::Nothing), None);
}

// ── Text output ────────────────────────────────────────────────────────────

#[test]
fn key_wrapping_matrix() {
    let value = Listing {
        id: 1,
        name: "foo".to_owned(),
        price: 2.5,
        is_active: true,
    };
    assert_eq!(
        plain_text(&value),
        Some("{id: 1,name: \"foo\",price: 2.5,isActive: true}".to_owned())
    );
    assert_eq!(
        json_text(&value),
        Some("{\"id\": 1,\"name\": \"foo\",\"price\": 2.5,\"isActive\": true}".to_owned())
    );
}

#[test]
fn string_escaping_vector() {
    let value = "escape: \n \t \r \" \\";
    assert_eq!(
        plain_text(value),
        Some("\"escape: \\n \\t \\r \\\" \\\\\"".to_owned())
    );
}

#[test]
fn json_values_encode_directly() {
    let value = json!({
        "id": 1,
        "tags": ["a", null, "b"],
        "nested": {"flag": true, "ratio": 0.5},
        "note": "line\nbreak"
    });
    assert_eq!(
        json_text(&value),
        Some(
            "{\"id\": 1,\"tags\": [\"a\",null,\"b\"],\"nested\": {\"flag\": true,\"ratio\": 0.5},\"note\": \"line\\nbreak\"}"
                .to_owned()
        )
    );
    // Under nil-dropping rendering, JSON null map entries disappear while
    // array slots keep their position.
    let with_null = json!({"a": null, "b": [null, 1]});
    assert_eq!(plain_text(&with_null), Some("{b: [null,1]}".to_owned()));
}

#[test]
fn encoded_output_is_valid_json_when_configured_for_it() {
    let value = TreeEntity {
        id: 7,
        name: Some("root \"quoted\"".to_owned()),
        parent: None,
        children: vec![None],
    };
    let text = json_text(&value).expect("some output");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(
        parsed,
        json!({"id": 7, "name": "root \"quoted\"", "parent": null, "children": [null]})
    );
}

// ── Failure propagation ────────────────────────────────────────────────────

struct Poisoned;

impl Encodable for Poisoned {
    fn encode(&self, _encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        Err(EncodeError::message("poisoned value"))
    }
}

struct Carrier;

impl Encodable for Carrier {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        let mut keyed = encoder.as_keyed();
        keyed.write_int("ok", 1);
        keyed.write_value("bad", &Poisoned)?;
        Ok(())
    }
}

#[test]
fn nested_failures_abort_the_whole_pass() {
    let err = TextEncoder::new(true, true).encode(&Carrier).unwrap_err();
    assert!(err.to_string().contains("poisoned value"));
}
