//! Active navigation link highlighting.

use crate::view::LinkTarget;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Last `/`-separated segment of a path or URL. Empty for a trailing slash.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Mark the links pointing at the current page and unmark the rest.
///
/// Returns the indices of the marked links. Running it again on the same
/// location yields the same marks.
pub fn highlight<L: LinkTarget>(links: &[L], current_path: &str, active_class: &str) -> Vec<usize> {
    let current = file_name(current_path);
    let mut active = Vec::new();
    for (index, link) in links.iter().enumerate() {
        link.remove_class(active_class);
        if file_name(&link.target_url()) == current {
            link.add_class(active_class);
            active.push(index);
        }
    }
    active
}
