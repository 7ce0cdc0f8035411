use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CASHFLOW_BUILD_HASH={git_hash}");

    let git_status = command_output("git", &["status", "--porcelain"])
        .map(|status| if status.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown");
    println!("cargo:rustc-env=CASHFLOW_BUILD_STATUS={git_status}");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=CASHFLOW_BUILD_TIMESTAMP={timestamp}");

    for (var, key) in [("TARGET", "TARGET"), ("PROFILE", "PROFILE")] {
        let value = env::var(var).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env=CASHFLOW_BUILD_{key}={value}");
    }

    let rustc = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CASHFLOW_BUILD_RUSTC={rustc}");
}

/// Trimmed stdout of a successful command, `None` when it fails or cannot run.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
