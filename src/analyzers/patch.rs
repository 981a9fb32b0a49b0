//! Reconstruction of added code from unified-diff text

/// Collect the added lines of a patch, markers stripped, in original order.
///
/// Only lines with a single leading `+` count; `+++` file headers, context
/// lines and deletions never contribute. Hunks are concatenated.
pub fn extract_added_code(patch: &str) -> String {
    patch
        .lines()
        .filter(|line| is_addition(line))
        .map(|line| &line[1..])
        .collect::<Vec<_>>()
        .join("\n")
}

/// Path named by the first `+++` header, `b/` prefix stripped
pub fn target_path(patch: &str) -> Option<&str> {
    patch
        .lines()
        .find_map(|line| line.strip_prefix("+++ "))
        .map(|path| path.split('\t').next().unwrap_or(path).trim())
        .filter(|path| *path != "/dev/null")
        .map(|path| path.strip_prefix("b/").unwrap_or(path))
}

fn is_addition(line: &str) -> bool {
    line.starts_with('+') && !line.starts_with("+++")
}
