use armbian_facts::armbian_release::ReleaseRecord;
use armbian_facts::facts::{FactsResult, FailureResult, ModuleArgs};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn record_is_nested_under_armbian_namespace() {
    let record: ReleaseRecord = [("board", "helios4"), ("linux_family", "mvebu")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let json: serde_json::Value =
        serde_json::from_str(&FactsResult::new(record).to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "ansible_facts": { "armbian": { "board": "helios4", "linux_family": "mvebu" } },
            "changed": false
        })
    );
}

#[test]
fn empty_record_serializes_as_empty_object() {
    let out = FactsResult::new(ReleaseRecord::new()).to_json().unwrap();

    assert_eq!(out, r#"{"ansible_facts":{"armbian":{}},"changed":false}"#);
}

#[test]
fn keys_are_emitted_in_sorted_order() {
    let record: ReleaseRecord = [("version", "5.91"), ("arch", "arm"), ("board", "helios4")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let out = FactsResult::new(record).to_json().unwrap();

    assert_eq!(
        out,
        r#"{"ansible_facts":{"armbian":{"arch":"arm","board":"helios4","version":"5.91"}},"changed":false}"#
    );
}

#[test]
fn failure_result_shape() {
    let out = FailureResult::new("bad args").to_json().unwrap();

    assert_eq!(out, r#"{"failed":true,"msg":"bad args"}"#);
}

#[test]
fn module_args_ignore_host_internal_keys() {
    let args = ModuleArgs::from_json(
        r#"{"fact_path": "/etc/ansible/facts.d", "_ansible_check_mode": true, "_ansible_verbosity": 2}"#,
    )
    .unwrap();

    assert_eq!(args.fact_path, Some(PathBuf::from("/etc/ansible/facts.d")));
    assert!(args.check_mode);
}

#[test]
fn module_args_default_when_empty() {
    assert_eq!(ModuleArgs::from_json("{}").unwrap(), ModuleArgs::default());
    assert!(ModuleArgs::from_json("not json").is_err());
}

#[test]
fn module_args_reject_unsupported_keys() {
    let err = ModuleArgs::from_json(r#"{"foo": "bar", "_ansible_debug": false}"#).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unsupported parameters for (armbian_facts) module: foo. \
         Supported parameters include: fact_path."
    );
}
