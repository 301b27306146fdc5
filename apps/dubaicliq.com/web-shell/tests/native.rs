#![cfg(not(target_arch = "wasm32"))]

use dubaicliq_web_shell::site_diagnostics_json;

#[test]
fn native_build_reports_the_stub_phase() {
    let snapshot: serde_json::Value = serde_json::from_str(&site_diagnostics_json()).unwrap();
    assert_eq!(snapshot["phase"], "native");
}
