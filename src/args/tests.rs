use super::*;
use clap::Parser;
use std::time::Duration;

#[test]
fn parse_args_defaults() -> Result<(), String> {
    let args = TesterArgs::try_parse_from(["volley", "-f", "requests.json"])
        .map_err(|err| format!("parse failed: {}", err))?;

    if args.requests_file.as_deref() != Some("requests.json") {
        return Err(format!("Unexpected requests file: {:?}", args.requests_file));
    }
    if args.concurrency.get() != 10 {
        return Err(format!("Unexpected concurrency: {}", args.concurrency.get()));
    }
    if args.repeat != 1 {
        return Err(format!("Unexpected repeat: {}", args.repeat));
    }
    if args.request_timeout != Duration::from_secs(30) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.connect_timeout != Duration::from_secs(5) {
        return Err(format!(
            "Unexpected connect timeout: {:?}",
            args.connect_timeout
        ));
    }
    if args.output_format != OutputFormat::Text {
        return Err("Expected text output by default".to_owned());
    }
    if args.disable_keepalive || args.verbose || args.no_color {
        return Err("Expected boolean flags to default to false".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> Result<(), String> {
    let args = TesterArgs::try_parse_from([
        "volley",
        "--requests-file",
        "batch.json",
        "-c",
        "4",
        "-n",
        "3",
        "--timeout",
        "250ms",
        "--connect-timeout",
        "2s",
        "--output-format",
        "json",
        "--disable-keepalive",
    ])
    .map_err(|err| format!("parse failed: {}", err))?;

    if args.concurrency.get() != 4 {
        return Err(format!("Unexpected concurrency: {}", args.concurrency.get()));
    }
    if args.repeat != 3 {
        return Err(format!("Unexpected repeat: {}", args.repeat));
    }
    if args.request_timeout != Duration::from_millis(250) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.connect_timeout != Duration::from_secs(2) {
        return Err(format!(
            "Unexpected connect timeout: {:?}",
            args.connect_timeout
        ));
    }
    if args.output_format != OutputFormat::Json {
        return Err("Expected json output".to_owned());
    }
    if !args.disable_keepalive {
        return Err("Expected keepalive to be disabled".to_owned());
    }
    Ok(())
}

#[test]
fn zero_concurrency_is_rejected() -> Result<(), String> {
    match TesterArgs::try_parse_from(["volley", "-f", "r.json", "-c", "0"]) {
        Ok(_) => Err("Expected concurrency 0 to be rejected".to_owned()),
        Err(_) => Ok(()),
    }
}

#[test]
fn zero_repeat_is_accepted() -> Result<(), String> {
    let args = TesterArgs::try_parse_from(["volley", "-f", "r.json", "-n", "0"])
        .map_err(|err| format!("parse failed: {}", err))?;
    if args.repeat != 0 {
        return Err(format!("Unexpected repeat: {}", args.repeat));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> Result<(), String> {
    let cases = [
        ("1500ms", Duration::from_millis(1500)),
        ("7", Duration::from_secs(7)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input).map_err(|err| format!("{}: {}", input, err))?;
        if parsed != expected {
            return Err(format!("{} parsed as {:?}", input, parsed));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_invalid_values() -> Result<(), String> {
    for input in ["", "ms", "0s", "5d", "10 s"] {
        if parse_duration_arg(input).is_ok() {
            return Err(format!("Expected '{}' to be rejected", input));
        }
    }
    Ok(())
}
