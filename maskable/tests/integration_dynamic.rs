//! Tests for values whose concrete type is only known at runtime.
//!
//! Covers `Dynamic`, any-kind handlers and `serde_json::Value`.

use std::collections::HashMap;

use maskable::{Dynamic, MaskError, Maskable, MaskableAny, Masker};

#[derive(Clone, Debug, PartialEq, Maskable)]
pub struct Secret {
    #[mask("fixed")]
    pub token: String,
    pub label: String,
}

#[test]
fn test_dynamic_delegates_to_concrete_value() {
    #[derive(Clone, Debug, Maskable)]
    struct Event {
        #[mask("filled")]
        pub payload: Dynamic,
        pub attachments: Vec<Dynamic>,
        pub missing: Option<Dynamic>,
    }

    let masker = Masker::new();
    let event = Event {
        payload: Dynamic::new(String::from("Usagi")),
        attachments: vec![
            Dynamic::new(Secret {
                token: "abc".into(),
                label: "api".into(),
            }),
            Dynamic::new(42_i64),
        ],
        missing: None,
    };

    let masked = masker.mask(&event).unwrap();

    assert_eq!(masked.payload.downcast_ref::<String>().unwrap(), "*****");
    let secret = masked.attachments[0].downcast_ref::<Secret>().unwrap();
    assert_eq!(secret.token, "********");
    assert_eq!(secret.label, "api");
    assert_eq!(masked.attachments[1].downcast_ref::<i64>(), Some(&42));
    assert!(masked.missing.is_none());

    // The original still holds the clear value.
    assert_eq!(event.payload.downcast_ref::<String>().unwrap(), "Usagi");
}

#[test]
fn test_zero_on_dynamic_keeps_concrete_type() {
    let masker = Masker::new();
    let value = Dynamic::new(vec![1_u32, 2, 3]);

    let masked = masker.mask(&value).unwrap();
    assert!(masked.is::<Vec<u32>>());

    #[derive(Clone, Debug, Maskable)]
    struct Holder {
        #[mask("zero")]
        pub value: Dynamic,
    }
    let masked = masker.mask(&Holder { value }).unwrap();
    assert_eq!(masked.value.into_inner::<Vec<u32>>(), Some(Vec::new()));
}

#[test]
fn test_any_handler_sees_every_kind() {
    let masker = Masker::new();
    masker.register_any_handler("redact", |_, _, value: &dyn MaskableAny| {
        if let Some(text) = value.downcast_ref::<String>() {
            return Ok(Box::new(format!("<{} chars>", text.chars().count())));
        }
        Ok(value.zeroed_any())
    });

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Mixed {
        #[mask("redact")]
        pub name: String,
        #[mask("redact")]
        pub age: u8,
        #[mask("redact")]
        pub secret: Secret,
    }

    let masked = masker
        .mask(&Mixed {
            name: "ヤハッ！".into(),
            age: 3,
            secret: Secret {
                token: "abc".into(),
                label: "api".into(),
            },
        })
        .unwrap();

    assert_eq!(masked.name, "<4 chars>");
    assert_eq!(masked.age, 0);
    assert_eq!(
        masked.secret,
        Secret {
            token: String::new(),
            label: String::new(),
        }
    );
}

#[test]
fn test_any_handler_type_mismatch_is_reported() {
    let masker = Masker::new();
    masker.register_any_handler("swap", |_, _, _| Ok(Box::new(0_u8)));

    #[derive(Clone, Debug, Maskable)]
    struct Target {
        #[mask("swap")]
        pub name: String,
    }

    let err = masker
        .mask(&Target {
            name: "Usagi".into(),
        })
        .unwrap_err();
    assert_eq!(err.field_path(), Some("name"));
    assert!(matches!(
        err.root(),
        MaskError::TypeMismatch { found: "u8", .. }
    ));
}

#[test]
fn test_handler_can_reenter_masker() {
    let masker = Masker::new();
    masker.register_text_handler("double", |masker, _, value| {
        let once = masker.mask_string("hash", value)?;
        masker.mask_string("filled4", &once)
    });

    assert_eq!(masker.mask_string("double", "abc").unwrap(), "****");
}

#[cfg(feature = "json")]
mod json {
    use maskable::Masker;
    use serde_json::json;

    #[test]
    fn test_json_objects_use_registry_by_key() {
        let masker = Masker::new();
        masker.register_field_rule("password", "fixed");
        masker.register_field_rule("age", "random100");
        masker.register_field_rule("ratio", "random1.2");

        let value = json!({
            "user": "usagi",
            "password": "hunter2",
            "age": 3,
            "ratio": 0.5,
            "nested": { "password": "x" },
            "list": [{ "password": "y" }]
        });
        let masked = masker.mask(&value).unwrap();

        assert_eq!(masked["user"], "usagi");
        assert_eq!(masked["password"], "********");
        assert!(masked["age"].as_i64().unwrap() < 100);
        assert!(masked["ratio"].as_f64().unwrap() < 1.0);
        assert_eq!(masked["nested"]["password"], "********");
        assert_eq!(masked["list"][0]["password"], "********");

        assert_eq!(value["password"], "hunter2");
    }

    #[test]
    fn test_json_rule_applies_to_whole_tree() {
        let masker = Masker::new();
        let value = json!(["ab", 1, null, true, { "k": "xyz" }]);

        let masked = maskable::Maskable::mask_with(&value, &masker, "filled").unwrap();
        assert_eq!(masked, json!(["**", 1, null, true, { "k": "***" }]));

        let zeroed = maskable::Maskable::mask_with(&value, &masker, "zero").unwrap();
        assert_eq!(zeroed, json!([]));
    }

    #[test]
    fn test_json_integers_fall_back_to_float_handlers() {
        let masker = Masker::new();
        masker.register_float_handler("half", |_, _, value| Ok(value / 2.0));

        let value = json!({ "whole": 10, "big": u64::MAX, "ratio": 0.5 });
        let masked = maskable::Maskable::mask_with(&value, &masker, "half").unwrap();
        assert_eq!(masked["whole"], json!(5.0));
        assert_eq!(masked["ratio"], json!(0.25));
        assert!(masked["big"].is_f64());

        // Integer handlers still win for whole numbers.
        let masked = maskable::Maskable::mask_with(&json!(10), &masker, "random5").unwrap();
        assert!(masked.as_i64().is_some_and(|v| (0..5).contains(&v)));
    }

    #[test]
    fn test_json_inside_composite() {
        #[derive(Clone, Debug, maskable::Maskable)]
        struct Request {
            pub path: String,
            #[mask("hash")]
            pub body: serde_json::Value,
        }

        let masker = Masker::new();
        let masked = masker
            .mask(&Request {
                path: "/login".into(),
                body: json!({ "user": "" , "pin": "1234" }),
            })
            .unwrap();

        assert_eq!(masked.path, "/login");
        assert_eq!(masked.body["user"], "");
        assert_eq!(
            masked.body["pin"],
            "7110eda4d09e062aa5e4a390b0a572ac0d2c0220"
        );
    }
}

#[test]
fn test_dynamic_map_values() {
    let masker = Masker::new();
    masker.register_field_rule("token", "fixed");

    let values = HashMap::from([
        ("token".to_owned(), Dynamic::new(String::from("abc"))),
        ("count".to_owned(), Dynamic::new(7_u64)),
    ]);
    let masked = masker.mask(&values).unwrap();

    assert_eq!(
        masked["token"].downcast_ref::<String>().map(String::as_str),
        Some("********")
    );
    assert_eq!(masked["count"].downcast_ref::<u64>(), Some(&7));
}
