//! Edge membership encoding.
//!
//! An edge records the graphs it belongs to in one string property,
//! `,g1,g2,`. Every name is bracketed by commas on both sides, so testing
//! for `,g1,` never matches `g10`.

const SEP: char = ',';

fn bracketed(name: &str) -> String {
    format!("{SEP}{name}{SEP}")
}

/// Returns true if `membership` lists `name`.
pub fn contains(membership: Option<&str>, name: &str) -> bool {
    membership.map_or(false, |m| m.contains(&bracketed(name)))
}

/// Add `name` unless already listed.
pub fn append(membership: Option<&str>, name: &str) -> String {
    match membership {
        Some(m) if contains(Some(m), name) => m.to_string(),
        Some(m) if m.ends_with(SEP) => format!("{m}{name}{SEP}"),
        Some(m) if !m.is_empty() => format!("{m}{SEP}{name}{SEP}"),
        _ => bracketed(name),
    }
}

/// Drop `name`. `None` when nothing is left.
pub fn remove(membership: Option<&str>, name: &str) -> Option<String> {
    let m = membership?;
    let rest = m.replace(&bracketed(name), &SEP.to_string());
    if rest.trim_matches(SEP).is_empty() {
        None
    } else {
        Some(rest)
    }
}
