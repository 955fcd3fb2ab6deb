use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");

    let git_version = get_git_version();
    let git_hash = get_git_hash();

    let build_time = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    let version_code = format!(
        r#"
/// Version string generated at compile time
pub const VERSION: &str = "{}";

/// Git commit hash (short)
pub const GIT_HASH: &str = "{}";

/// Build timestamp
pub const BUILD_TIME: &str = "{}";
"#,
        git_version, git_hash, build_time
    );

    fs::write(&dest_path, version_code).unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}

fn cargo_version() -> String {
    env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.1.0".to_string())
}

fn run_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn get_git_version() -> String {
    if let Some(version) = run_git(&["describe", "--tags", "--dirty", "--always"]) {
        // A bare commit hash means there is no tag to describe from
        if !version.starts_with('v') && !version.contains('-') {
            let short = if version.len() >= 7 {
                &version[..7]
            } else {
                &version[..]
            };
            return format!("{}-g{}", cargo_version(), short);
        }
        return version;
    }

    if let Some(hash) = run_git(&["rev-parse", "--short", "HEAD"]) {
        return format!("{}-g{}", cargo_version(), hash);
    }

    cargo_version()
}

fn get_git_hash() -> String {
    run_git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string())
}
