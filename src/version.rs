// Include the generated version information
include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Get the application version string for display
pub fn get_version() -> &'static str {
    VERSION
}

pub fn get_git_hash() -> &'static str {
    GIT_HASH
}

pub fn get_build_time() -> &'static str {
    BUILD_TIME
}

/// Build header shown by the `version-info` subcommand
pub fn header_lines() -> [String; 2] {
    [
        format!("Ordered List v{}", get_version()),
        format!("Built: {} | Git: {}", get_build_time(), get_git_hash()),
    ]
}

pub fn print_header_info() {
    for line in header_lines() {
        println!("{}", line);
    }
}
