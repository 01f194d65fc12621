use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    // Builds from a source tarball have no git metadata; the version
    // endpoint falls back to "unknown" for the commit in that case.
    let in_git_checkout = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let result = if in_git_checkout {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(false) // Short SHA
            .emit()
    } else {
        EmitBuilder::builder().build_timestamp().emit()
    };

    result.expect("Unable to generate build metadata");
}
