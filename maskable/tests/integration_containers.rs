//! Tests for masking through standard library containers.
//!
//! Containers pass their rule down to every element. Maps additionally
//! consult the field-name registry with their text keys.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    marker::PhantomData,
    sync::Arc,
};

use maskable::{Maskable, Masker, Opaque};

#[derive(Clone, Debug, PartialEq, Maskable)]
pub struct Card {
    #[mask("filled4")]
    pub number: String,
    pub holder: String,
}

fn card(number: &str) -> Card {
    Card {
        number: number.into(),
        holder: "Usagi".into(),
    }
}

#[test]
fn test_sequences_mask_every_element() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Wallet {
        pub cards: Vec<Card>,
        #[mask("fixed")]
        pub notes: VecDeque<String>,
        #[mask("hash")]
        pub pins: [String; 2],
        #[mask("filled")]
        pub codes: Box<[String]>,
    }

    let masker = Masker::new();
    let masked = masker
        .mask(&Wallet {
            cards: vec![card("4111111111111111"), card("5500000000000004")],
            notes: VecDeque::from(["a".to_owned(), String::new()]),
            pins: ["1234".into(), String::new()],
            codes: vec!["ab".to_owned()].into_boxed_slice(),
        })
        .unwrap();

    assert!(masked.cards.iter().all(|c| c.number == "****" && c.holder == "Usagi"));
    assert_eq!(masked.notes, VecDeque::from(["********".to_owned(), String::new()]));
    assert_eq!(masked.pins[0], "7110eda4d09e062aa5e4a390b0a572ac0d2c0220");
    assert_eq!(masked.pins[1], "");
    assert_eq!(&*masked.codes, &["**".to_owned()]);
}

#[test]
fn test_sets_mask_elements_and_may_collapse() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Tags {
        #[mask("fixed")]
        pub hashed: HashSet<String>,
        #[mask("filled")]
        pub ordered: BTreeSet<String>,
    }

    let masker = Masker::new();
    let masked = masker
        .mask(&Tags {
            hashed: HashSet::from(["a".to_owned(), "bb".to_owned()]),
            ordered: BTreeSet::from(["x".to_owned(), "yy".to_owned()]),
        })
        .unwrap();

    assert_eq!(masked.hashed, HashSet::from(["********".to_owned()]));
    assert_eq!(
        masked.ordered,
        BTreeSet::from(["*".to_owned(), "**".to_owned()])
    );
}

#[test]
fn test_map_rule_applies_to_values_not_keys() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Headers {
        #[mask("fixed")]
        pub values: BTreeMap<String, String>,
    }

    let masker = Masker::new();
    let masked = masker
        .mask(&Headers {
            values: BTreeMap::from([("authorization".to_owned(), "Bearer x".to_owned())]),
        })
        .unwrap();

    assert_eq!(masked.values["authorization"], "********");
}

#[test]
fn test_map_without_rule_uses_registry_by_key() {
    let masker = Masker::new();
    masker.register_field_rule("password", "zero");
    masker.register_field_rule("number", "fixed");

    let form = HashMap::from([
        ("password".to_owned(), "hunter2".to_owned()),
        ("user".to_owned(), "usagi".to_owned()),
    ]);
    let masked = masker.mask(&form).unwrap();
    assert_eq!(masked["password"], "");
    assert_eq!(masked["user"], "usagi");

    // Values that are composites still use their own annotations.
    let cards = BTreeMap::from([("main".to_owned(), card("4111"))]);
    let masked = masker.mask(&cards).unwrap();
    assert_eq!(masked["main"].number, "****");
}

#[test]
fn test_map_rule_wins_over_registry() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Form {
        #[mask("filled")]
        pub fields: HashMap<String, String>,
    }

    let masker = Masker::new();
    masker.register_field_rule("password", "fixed");

    let masked = masker
        .mask(&Form {
            fields: HashMap::from([("password".to_owned(), "abc".to_owned())]),
        })
        .unwrap();
    assert_eq!(masked.fields["password"], "***");
}

#[test]
fn test_non_text_keys_skip_registry() {
    let masker = Masker::new();
    masker.register_field_rule("1", "zero");

    let scores = BTreeMap::from([(1_u32, "kept".to_owned())]);
    assert_eq!(masker.mask(&scores).unwrap(), scores);
}

#[test]
fn test_wrappers_propagate_rule() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Wrapped {
        #[mask("fixed")]
        pub boxed: Box<String>,
        #[mask("fixed")]
        pub shared: Arc<String>,
        #[mask("fixed")]
        pub shared_str: Arc<str>,
        #[mask("fixed")]
        pub maybe: Option<String>,
        #[mask("fixed")]
        pub nothing: Option<String>,
        #[mask("fixed")]
        pub pair: (String, u8),
        #[mask("fixed")]
        pub outcome: Result<String, String>,
    }

    let masker = Masker::new();
    let masked = masker
        .mask(&Wrapped {
            boxed: Box::new("a".into()),
            shared: Arc::new("b".into()),
            shared_str: Arc::from("c"),
            maybe: Some("d".into()),
            nothing: None,
            pair: ("e".into(), 5),
            outcome: Err("f".into()),
        })
        .unwrap();

    let fixed = "********".to_owned();
    assert_eq!(*masked.boxed, fixed);
    assert_eq!(*masked.shared, fixed);
    assert_eq!(&*masked.shared_str, fixed.as_str());
    assert_eq!(masked.maybe, Some(fixed.clone()));
    assert_eq!(masked.nothing, None);
    assert_eq!(masked.pair, (fixed.clone(), 5));
    assert_eq!(masked.outcome, Err(fixed));
}

#[test]
fn test_zero_on_containers_keeps_shape() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Zeroed {
        #[mask("zero")]
        pub list: Vec<String>,
        #[mask("zero")]
        pub map: BTreeMap<String, u32>,
        #[mask("zero")]
        pub maybe: Option<u32>,
        #[mask("zero")]
        pub array: [u32; 3],
        #[mask("zero")]
        pub flag: bool,
    }

    let masker = Masker::new();
    let masked = masker
        .mask(&Zeroed {
            list: vec!["a".into()],
            map: BTreeMap::from([("k".to_owned(), 1)]),
            maybe: Some(9),
            array: [1, 2, 3],
            flag: true,
        })
        .unwrap();

    assert!(masked.list.is_empty());
    assert!(masked.map.is_empty());
    assert_eq!(masked.maybe, None);
    assert_eq!(masked.array, [0, 0, 0]);
    assert!(!masked.flag);
}

#[test]
fn test_integer_widths_and_out_of_range() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Small {
        #[mask("random100")]
        pub tiny: u8,
        #[mask("random100")]
        pub short: i16,
    }

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Overflow {
        #[mask("max")]
        pub value: u16,
    }

    let masker = Masker::new();
    let masked = masker.mask(&Small { tiny: 1, short: 1 }).unwrap();
    assert!(masked.tiny < 100);
    assert!((0..100).contains(&masked.short));

    masker.register_unsigned_handler("max", |_, _, _, _| Ok(u64::MAX));
    let err = masker.mask(&Overflow { value: 1 }).unwrap_err();
    assert_eq!(err.field_path(), Some("value"));
    assert!(matches!(
        err.root(),
        maskable::MaskError::OutOfRange { target: "u16", .. }
    ));
}

#[test]
fn test_random_bound_wider_than_field_type_is_capped() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Narrow {
        #[mask("random1000")]
        pub age: u8,
        #[mask("random1000")]
        pub delta: i8,
    }

    let masker = Masker::new();
    for _ in 0..200 {
        let masked = masker.mask(&Narrow { age: 3, delta: -3 }).unwrap();
        assert!((0..=i8::MAX).contains(&masked.delta));
    }
}

#[test]
fn test_opaque_values_pass_through() {
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Foreign(pub String);

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Record<T> {
        #[mask(opaque)]
        pub foreign: Foreign,
        #[mask("fixed")]
        pub wrapped: Opaque<String>,
        pub _marker: PhantomData<T>,
        #[mask(opaque)]
        hidden: Foreign,
    }

    let masker = Masker::new();
    let record: Record<Foreign> = Record {
        foreign: Foreign("keep".into()),
        wrapped: Opaque("keep".into()),
        _marker: PhantomData,
        hidden: Foreign("gone".into()),
    };
    let masked = masker.mask(&record).unwrap();
    assert_eq!(masked.foreign, Foreign("keep".into()));
    assert_eq!(masked.wrapped, Opaque("keep".to_owned()));
    assert_eq!(masked.hidden, Foreign::default());
}

#[test]
fn test_generic_composites() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Page<T> {
        #[mask("filled")]
        pub items: Vec<T>,
        pub total: usize,
    }

    let masker = Masker::new();
    let page = Page {
        items: vec!["ab".to_owned(), "c".to_owned()],
        total: 2,
    };
    let masked = masker.mask(&page).unwrap();
    assert_eq!(masked.items, vec!["**".to_owned(), "*".to_owned()]);
    assert_eq!(masked.total, 2);
}
