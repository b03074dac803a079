use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

const BINARY_NAME: &str = "signal-dashboard";

// Nothing listens on the discard port in test environments.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".signal-dashboard").join("config.json")
}

/// Command with an isolated $HOME and no URL from the environment.
fn dashboard(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("SIGNAL_API_URL");
    cmd
}

/// Serves `body` as JSON for every request on a background thread.
fn serve_json(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok() && line != "\r\n" && !line.is_empty() {
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    url
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = temp_home_dir();
    dashboard(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Terminal dashboard for forex trading signals"))
        .stdout(contains("snapshot"))
        .stdout(contains("check"));
}

#[test]
/// Start help should list the refresh options.
fn start_help_lists_options() {
    let home = temp_home_dir();
    dashboard(&home)
        .args(["start", "--help"])
        .assert()
        .success()
        .stdout(contains("--refresh-secs"))
        .stdout(contains("--skip-overlapping"))
        .stdout(contains("--headless"));
}

#[test]
/// Check should fail when the backend cannot be reached.
fn check_fails_when_backend_unreachable() {
    let home = temp_home_dir();
    dashboard(&home)
        .args(["check", "--api-url", UNREACHABLE_URL])
        .assert()
        .failure()
        .stderr(contains("Backend unreachable"));
}

#[test]
/// Check should succeed against a healthy backend.
fn check_reports_healthy_backend() {
    let home = temp_home_dir();
    let url = serve_json(r#"{"status":"healthy","service":"trading-signal-provider"}"#);
    dashboard(&home)
        .args(["check", "--api-url", &url])
        .assert()
        .success()
        .stdout(contains("Backend is healthy"))
        .stdout(contains("trading-signal-provider"));
}

#[test]
/// The URL can come from the environment instead of a flag.
fn check_uses_url_from_environment() {
    let home = temp_home_dir();
    dashboard(&home)
        .env("SIGNAL_API_URL", UNREACHABLE_URL)
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("127.0.0.1:9"));
}

#[test]
/// Snapshot should exit non-zero when a fetch fails.
fn snapshot_fails_when_backend_unreachable() {
    let home = temp_home_dir();
    dashboard(&home)
        .args(["snapshot", "--api-url", UNREACHABLE_URL])
        .assert()
        .failure()
        .stderr(contains("Failed to fetch dashboard data"));
}

#[test]
/// A config file that is not valid JSON is reported, not ignored.
fn invalid_config_file_is_reported() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    dashboard(&home)
        .args(["check", "--api-url", UNREACHABLE_URL])
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}
