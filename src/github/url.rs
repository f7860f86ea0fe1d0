use crate::error::{Result, ScanError};

/// Owner/repository pair extracted from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub owner: String,
    pub repo: String,
}

/// Extracts the owner and repository name from a GitHub URL.
///
/// Accepts bare `github.com/owner/repo` as well as full URLs with
/// scheme, deep paths, query strings and a trailing `.git` suffix.
pub fn parse_target(input: &str) -> Result<ScanTarget> {
    let trimmed = input.trim();
    let rest = trimmed
        .find("github.com/")
        .map(|idx| &trimmed[idx + "github.com/".len()..])
        .ok_or_else(|| ScanError::InvalidUrl(input.to_string()))?;

    let boundary = |c: char| c == '/' || c.is_whitespace() || c == '?' || c == '#';

    let slash = rest
        .find('/')
        .ok_or_else(|| ScanError::InvalidUrl(input.to_string()))?;
    let owner = &rest[..slash];
    if owner.is_empty() || owner.contains(boundary) {
        return Err(ScanError::InvalidUrl(input.to_string()));
    }

    let tail = &rest[slash + 1..];
    let name = match tail.find(boundary) {
        Some(end) => &tail[..end],
        None => tail,
    };
    let name = name.strip_suffix(".git").unwrap_or(name);
    if name.is_empty() {
        return Err(ScanError::InvalidUrl(input.to_string()));
    }

    Ok(ScanTarget {
        owner: owner.to_string(),
        repo: name.to_string(),
    })
}
