#![cfg(target_arch = "wasm32")]
/// Browser tests for the storage record conversion

use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_json::Value;
use tab_to_note::NoteConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js_record(fields: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in fields {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

fn decode(record: JsValue) -> NoteConfig {
    let value: Value = serde_wasm_bindgen::from_value(record).unwrap();
    NoteConfig::from_stored(&value)
}

#[wasm_bindgen_test]
fn partial_js_record_merges_over_defaults() {
    let record = js_record(&[("endpoint", JsValue::from_str("http://localhost:27123"))]);

    let config = decode(record);

    assert_eq!(config, NoteConfig::new("http://localhost:27123", "", "File.md"));
}

#[wasm_bindgen_test]
fn undefined_fields_keep_defaults() {
    let record = js_record(&[
        ("token", JsValue::UNDEFINED),
        ("targetNote", JsValue::from_str("Inbox.md")),
    ]);

    let config = decode(record);

    assert_eq!(config, NoteConfig::new("", "", "Inbox.md"));
}

#[wasm_bindgen_test]
fn config_serializes_to_plain_object() {
    let config = NoteConfig::new("http://localhost:27123", "secret", "Reading.md");
    let value = serde_json::to_value(&config).unwrap();

    let js = value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();

    assert!(js.is_object());
    let target = Reflect::get(&js, &JsValue::from_str("targetNote")).unwrap();
    assert_eq!(target.as_string().as_deref(), Some("Reading.md"));
    assert_eq!(decode(js), config);
}
