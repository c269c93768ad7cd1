use serde_json::Value;

use crate::common::{Workspace, csvstats};

#[test]
fn json_report() {
    let ws = Workspace::new();
    let path = ws.file("data.csv", "x,label\n-2,a\n0,b\n2,c\n4,d\n");

    let output = csvstats().args(["--format", "json"]).arg(&path).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).expect("valid JSON");

    assert_eq!(json["file"], "data.csv");
    assert_eq!(json["rows"], 4);
    assert_eq!(json["columns"], 2);
    assert_eq!(json["outcome"]["status"], "columns");
    let columns = json["outcome"]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0]["name"], "x");
    assert_eq!(columns[0]["summary"]["min"], -2.0);
    assert_eq!(columns[0]["summary"]["max"], 4.0);
    assert_eq!(columns[0]["summary"]["mean"], 1.0);
}

#[test]
fn json_uses_null_for_non_finite() {
    let ws = Workspace::new();
    let path = ws.file("inf.csv", "v\n1\ninf\n");

    let output = csvstats().args(["--format", "json"]).arg(&path).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let summary = &json["outcome"]["columns"][0]["summary"];
    assert_eq!(summary["min"], 1.0);
    assert!(summary["max"].is_null());
    assert!(summary["mean"].is_null());
}

#[test]
fn yaml_report_for_empty_file() {
    let ws = Workspace::new();
    let path = ws.file("empty.csv", "");

    let output = csvstats().args(["--format", "yaml"]).arg(&path).assert().success();
    let text = String::from_utf8_lossy(&output.get_output().stdout);
    assert!(text.contains("file: empty.csv"));
    assert!(text.contains("status: empty"));
}
