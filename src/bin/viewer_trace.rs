use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use sun_viewer::api::{SunViewer, ViewerConfig};
use sun_viewer::core::SystemClock;
use sun_viewer::display::NullDisplay;
use sun_viewer::interaction::InputEvent;
use sun_viewer::telemetry::init_default_tracing;

struct CliArgs {
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ViewerConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ViewerConfig::default(),
    };

    let mut viewer = SunViewer::new(NullDisplay::default(), config, &SystemClock)
        .map_err(|err| err.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_snapshot(&mut out, &viewer.snapshot().to_json().map_err(|e| e.to_string())?)?;

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = parse_command(line)?;
        match viewer.handle_event(event) {
            Ok(_) => {}
            Err(err) => eprintln!("rejected `{line}`: {err}"),
        }
        let json = viewer.snapshot().to_json().map_err(|e| e.to_string())?;
        print_snapshot(&mut out, &json)?;
    }
    Ok(())
}

fn print_snapshot(out: &mut impl Write, json: &str) -> Result<(), String> {
    writeln!(out, "{json}").map_err(|err| format!("failed to write stdout: {err}"))
}

fn parse_command(line: &str) -> Result<InputEvent, String> {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, Some(argument.trim())),
        None => (line, None),
    };
    let event = match (command, argument) {
        ("set", Some(raw)) => InputEvent::SetTime(raw.to_owned()),
        ("channel", Some(code)) => InputEvent::SetChannel(code.to_owned()),
        ("key", Some(code)) => InputEvent::Key(code.to_owned()),
        ("prev", None) => InputEvent::StepBackward,
        ("next", None) => InputEvent::StepForward,
        ("fail", None) => InputEvent::LoadFailed,
        ("ok", None) => InputEvent::LoadSucceeded,
        _ => {
            return Err(format!(
                "unknown command `{line}`; expected set <YYYY-MM-DDTHH:mm>|prev|next|key <code>|channel <code>|fail|ok"
            ));
        }
    };
    Ok(event)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--config requires a path".to_owned())?;
                config = Some(PathBuf::from(path));
            }
            _ => return Err("usage: viewer_trace [--config <path>] < commands".to_owned()),
        }
    }
    Ok(CliArgs { config })
}
