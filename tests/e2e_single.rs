
use std::fs;
use std::path::PathBuf;

use tempfile::{TempDir, tempdir};

use support_single::{run_volley, spawn_http_server_or_skip};

fn write_requests(contents: &str) -> Result<(TempDir, PathBuf), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("requests.json");
    fs::write(&path, contents).map_err(|err| format!("write requests failed: {}", err))?;
    Ok((dir, path))
}

fn stdout_of(output: &std::process::Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[test]
fn e2e_single_text_report() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let requests = format!(
        r#"[
            {{"method": "GET", "url": "{url}/health"}},
            {{"method": "post", "url": "{url}/users", "headers": {{"X-Trace": "e2e"}}, "body": {{"name": "Ada"}}}},
            {{"method": "GET", "url": "{url}/missing"}}
        ]"#
    );
    let (_dir, path) = write_requests(&requests)?;

    let output = run_volley([
        "-f".to_owned(),
        path.to_string_lossy().into_owned(),
        "-c".to_owned(),
        "2".to_owned(),
        "-n".to_owned(),
        "2".to_owned(),
    ])?;
    let stdout = stdout_of(&output)?;

    for expected in [
        "Load Test Summary",
        "Total Requests   : 6",
        "Successful       : 6",
        "Failed           : 0",
        "Status Codes     : 200(4), 404(2)",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("Missing {:?} in:\n{}", expected, stdout));
        }
    }
    if stdout.contains("Errors:") {
        return Err(format!("Unexpected errors section:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_single_json_report_with_wrapped_file() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let requests = format!(r#"{{"requests": [{{"method": "GET", "url": "{url}/"}}]}}"#);
    let (_dir, path) = write_requests(&requests)?;

    let output = run_volley([
        "--requests-file".to_owned(),
        path.to_string_lossy().into_owned(),
        "--repeat".to_owned(),
        "3".to_owned(),
        "--output-format".to_owned(),
        "json".to_owned(),
    ])?;
    let stdout = stdout_of(&output)?;

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|err| format!("{}: {}", err, stdout))?;
    if value.get("total_requests").and_then(serde_json::Value::as_u64) != Some(3) {
        return Err(format!("Unexpected report: {}", value));
    }
    if value.get("wall_time_secs").is_none() {
        return Err(format!("Missing wall time: {}", value));
    }
    Ok(())
}

#[test]
fn e2e_single_unreachable_target_still_reports() -> Result<(), String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    drop(listener);

    let requests = format!(r#"[{{"method": "GET", "url": "http://{addr}/down"}}]"#);
    let (_dir, path) = write_requests(&requests)?;

    let output = run_volley([
        "-f".to_owned(),
        path.to_string_lossy().into_owned(),
        "--connect-timeout".to_owned(),
        "500ms".to_owned(),
    ])?;
    let stdout = stdout_of(&output)?;

    if !stdout.contains("Failed           : 1") || !stdout.contains("Errors:") {
        return Err(format!("Expected a reported failure:\n{}", stdout));
    }
    if !stdout.contains("Status Codes     : none") {
        return Err(format!("Expected no status codes:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_single_rejects_malformed_descriptor() -> Result<(), String> {
    let (_dir, path) = write_requests(r#"[{"url": "http://127.0.0.1:1/"}]"#)?;

    let output = run_volley(["-f".to_owned(), path.to_string_lossy().into_owned()])?;
    if output.status.success() {
        return Err("Expected a missing method to fail the run".to_owned());
    }
    if !String::from_utf8_lossy(&output.stdout).trim().is_empty() {
        return Err("No report should print for rejected input".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("method") {
        return Err(format!("Expected the missing field to be named: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_single_missing_requests_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.json");

    let output = run_volley(["-f".to_owned(), path.to_string_lossy().into_owned()])?;
    if output.status.success() {
        return Err("Expected a missing requests file to fail".to_owned());
    }
    Ok(())
}
