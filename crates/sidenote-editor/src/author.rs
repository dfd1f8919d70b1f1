use std::process::Command;

/// Resolve the note author from the local git configuration, once at
/// startup. Any failure (no git binary, no repository, unset name) is
/// silent and yields None.
pub fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    normalize(&String::from_utf8_lossy(&output.stdout))
}

fn normalize(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
