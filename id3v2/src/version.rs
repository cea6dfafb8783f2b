pub fn print_cli_version_banner(tool_name: &str, version: &str, release: &str, commit: &str) {
    println!("{tool_name}");
    println!("License: GNU AGPL v3 (AGPL-3.0-only)");
    println!();

    println!("\tVersion:     {version}");
    if !release.is_empty() {
        println!("\tGit tag:     {release}");
    }
    if !commit.is_empty() {
        println!("\tGit commit:  {commit}");
    }
}
