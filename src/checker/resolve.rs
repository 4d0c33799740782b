// src/checker/resolve.rs
// =============================================================================
// Turns a local link into an absolute filesystem path.
//
//   "/assets/app.css"    -> <repo root>/assets/app.css
//   "../about.html#team" -> <directory of the document>/../about.html
//
// Fragments and query strings are dropped first since they don't name a
// file. The result is canonical: "." and ".." are gone and symlinks are
// followed wherever the path actually exists.
// =============================================================================

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::classify::is_external_or_special;

/// Resolves a raw link to a canonical absolute path.
///
/// `repo_root` should already be canonical. Returns `None` for links that
/// are empty once the fragment and query are removed, or that are
/// external/special.
pub fn resolve_local_target(raw: &str, html_file: &Path, repo_root: &Path) -> Option<PathBuf> {
    let without_fragment = raw.split_once('#').map_or(raw, |(path, _)| path);
    let without_query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(path, _)| path)
        .trim();

    if without_query.is_empty() || is_external_or_special(without_query) {
        return None;
    }

    let joined = match without_query.strip_prefix('/') {
        // Root-relative: "/x" and "//x" both mean <repo root>/x
        Some(rest) => repo_root.join(rest.trim_start_matches('/')),
        None => html_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(without_query),
    };

    Some(soft_canonicalize(&joined))
}

/// Canonicalizes a path that may not exist.
///
/// Components are applied one at a time. After each name is pushed the path
/// built so far is canonicalized with `fs::canonicalize` if it exists, so
/// symlinks are followed before a later `..` is applied. Missing components
/// are kept as-is; a `..` after one can bring the path back onto disk, and
/// symlinks from there on are followed again.
pub fn soft_canonicalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(real) = fs::canonicalize(&resolved) {
                    resolved = real;
                }
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir_all(root.join("docs/guide")).unwrap();
        fs::write(root.join("docs/index.html"), "").unwrap();
        (dir, root)
    }

    #[test]
    fn test_root_relative_resolves_against_repo_root() {
        let (_dir, root) = fixture();
        let doc = root.join("docs/guide/page.html");
        assert_eq!(
            resolve_local_target("/about.html", &doc, &root),
            Some(root.join("about.html"))
        );
        assert_eq!(
            resolve_local_target("//assets/app.css", &doc, &root),
            Some(root.join("assets/app.css"))
        );
    }

    #[test]
    fn test_root_relative_is_the_same_from_any_directory() {
        let (_dir, root) = fixture();
        let a = resolve_local_target("/x/y.html", &root.join("index.html"), &root);
        let b = resolve_local_target("/x/y.html", &root.join("docs/guide/deep.html"), &root);
        assert_eq!(a, b);
    }

    #[test]
    fn test_relative_resolves_against_document_directory() {
        let (_dir, root) = fixture();
        let doc = root.join("docs/index.html");
        assert_eq!(
            resolve_local_target("guide/about.html", &doc, &root),
            Some(root.join("docs/guide/about.html"))
        );
        assert_eq!(
            resolve_local_target("../top.html", &doc, &root),
            Some(root.join("top.html"))
        );
        assert_eq!(
            resolve_local_target("./guide/../index.html", &doc, &root),
            Some(root.join("docs/index.html"))
        );
    }

    #[test]
    fn test_fragment_and_query_are_stripped() {
        let (_dir, root) = fixture();
        let doc = root.join("docs/index.html");
        assert_eq!(
            resolve_local_target("guide/a.html?v=2#intro", &doc, &root),
            Some(root.join("docs/guide/a.html"))
        );
        assert_eq!(
            resolve_local_target("guide/b.html#x?y", &doc, &root),
            Some(root.join("docs/guide/b.html"))
        );
    }

    #[test]
    fn test_empty_or_special_after_stripping_is_none() {
        let (_dir, root) = fixture();
        let doc = root.join("docs/index.html");
        assert_eq!(resolve_local_target("?page=2", &doc, &root), None);
        assert_eq!(resolve_local_target("#top", &doc, &root), None);
        assert_eq!(resolve_local_target("  ?q  ", &doc, &root), None);
        assert_eq!(resolve_local_target("https://example.com/", &doc, &root), None);
        assert_eq!(resolve_local_target("mailto:a@b.c?subject=hi", &doc, &root), None);
    }

    #[test]
    fn test_missing_intermediate_components_do_not_fail() {
        let (_dir, root) = fixture();
        let doc = root.join("index.html");
        assert_eq!(
            resolve_local_target("nope/missing/../still/gone.html", &doc, &root),
            Some(root.join("nope/still/gone.html"))
        );
    }

    #[test]
    fn test_parent_dir_can_escape_the_root() {
        let (_dir, root) = fixture();
        let doc = root.join("index.html");
        let target = resolve_local_target("../../outside.html", &doc, &root).unwrap();
        assert!(!target.starts_with(&root));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_followed() {
        let (_dir, root) = fixture();
        std::os::unix::fs::symlink(root.join("docs/guide"), root.join("shortcut")).unwrap();
        let doc = root.join("index.html");
        assert_eq!(
            resolve_local_target("shortcut/page.html", &doc, &root),
            Some(root.join("docs/guide/page.html"))
        );
        // ".." after a symlink applies to the real directory
        assert_eq!(
            resolve_local_target("shortcut/../index.html", &doc, &root),
            Some(root.join("docs/index.html"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_after_a_missing_component_are_followed() {
        let (_dir, root) = fixture();
        std::os::unix::fs::symlink(root.join("docs/guide"), root.join("shortcut")).unwrap();
        let doc = root.join("index.html");
        assert_eq!(
            resolve_local_target("missing/../shortcut/page.html", &doc, &root),
            Some(root.join("docs/guide/page.html"))
        );
    }
}
