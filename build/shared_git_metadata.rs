use std::process::Command;

fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}

pub fn emit_git_metadata() {
    // Re-run when git state changes (commit, tag, branch) so cached CI
    // builds pick up the correct version after tagging.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../build/shared_git_metadata.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs");
    println!("cargo:rerun-if-changed=../.git/packed-refs");

    // Commit hash, and release version when HEAD is directly tagged.
    println!(
        "cargo:rustc-env=GIT_COMMIT={}",
        git_output(&["rev-list", "-1", "HEAD"])
    );
    println!(
        "cargo:rustc-env=RELEASE_VERSION={}",
        git_output(&["tag", "--points-at", "HEAD"])
    );
}
