use std::process::Command;

/// Embed the build revision as `GIT_HASH`, reported by the health endpoint.
///
/// `DRIFTMARK_BUILD_REV` takes precedence (release builds from a tarball have
/// no `.git`); otherwise the short commit hash, suffixed `-dirty` when the
/// working tree has uncommitted changes.
fn main() {
    println!("cargo:rerun-if-env-changed=DRIFTMARK_BUILD_REV");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    let rev = std::env::var("DRIFTMARK_BUILD_REV")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(git_revision);

    println!("cargo:rustc-env=GIT_HASH={}", rev);
}

fn git_revision() -> String {
    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]) else {
        return "unknown".to_string();
    };

    let dirty = Command::new("git")
        .args(["diff", "--quiet"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false);

    if dirty { format!("{}-dirty", hash) } else { hash }
}

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
