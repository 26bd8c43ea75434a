use assert_cmd::Command;
use predicates::str::{contains, is_empty};
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("pyready").unwrap()
}

fn dataset_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn malformed_target_version_is_fatal() {
    cmd()
        .arg("3.x")
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("invalid target version '3.x'"));
}

#[test]
fn major_only_target_version_is_fatal() {
    cmd()
        .arg("3")
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("invalid target version '3'"));
}

#[test]
fn missing_dataset_is_fatal() {
    cmd()
        .args(["3.11", "--projects", "/does/not/exist.json"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("failed to read project dataset"));
}

#[test]
fn reports_readiness_from_mock_index() {
    let mut server = mockito::Server::new();

    let _flask = server
        .mock("GET", "/flask/json")
        .with_status(200)
        .with_body(
            r#"{
                "info": {
                    "name": "flask",
                    "classifiers": ["Programming Language :: Python :: 3.11"]
                },
                "releases": {
                    "3.0.0": [
                        {"filename": "flask-3.0.0-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
                    ]
                }
            }"#,
        )
        .create();
    let _ghost = server.mock("GET", "/ghost/json").with_status(404).create();

    let dataset = dataset_file(
        r#"[
            {"project": "flask", "total_downloads": 1000},
            {"project": "ghost", "total_downloads": 10}
        ]"#,
    );

    let output = cmd()
        .args(["3.11", "--projects"])
        .arg(dataset.path())
        .args(["--index-url", &server.url()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["flask"]["verdict"], "ready");
    assert_eq!(report["flask"]["rank"], 1);
    assert_eq!(report["ghost"]["verdict"], "unknown");
    assert_eq!(report["ghost"]["rank"], 2);
}

#[test]
fn degraded_run_still_exits_zero() {
    let mut server = mockito::Server::new();

    let _m = server.mock("GET", "/flask/json").with_status(500).create();

    let dataset = dataset_file(r#"[{"project": "flask", "total_downloads": 1000}]"#);

    cmd()
        .args(["3.11", "--projects"])
        .arg(dataset.path())
        .args(["--index-url", &server.url()])
        .assert()
        .success()
        .stdout(contains("\"verdict\":\"unknown\""));
}
