//! Lexical path normalization and home-directory substitution

use std::io;
use std::path::{Component, Path, PathBuf};

use super::HOME_MARKER;

/// Resolves `.` and `..` and drops redundant separators without touching the
/// filesystem. `..` at the root stays at the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => cleaned.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    cleaned.pop();
                    depth -= 1;
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            Component::Normal(name) => {
                cleaned.push(name);
                depth += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Makes `path` absolute and clean, asking `cwd` for the working directory
/// only when the path is relative.
pub fn absolutize<F>(path: &Path, cwd: F) -> io::Result<PathBuf>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    if path.is_absolute() {
        return Ok(clean(path));
    }
    Ok(clean(&cwd()?.join(path)))
}

/// Replaces a leading `~` component with `home`, leaving other paths alone.
///
/// A leading `~` directly followed by `truncator` (e.g. `~…p`) is what
/// whole-path truncation leaves of `~/…p`, so it is home-relative too.
pub fn expand_home(path: &Path, home: Option<&Path>, truncator: char) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return path.to_path_buf();
    };
    let rest = components.as_path();

    let mut expanded = if first == HOME_MARKER {
        home.to_path_buf()
    } else {
        match first.to_str().and_then(|f| f.strip_prefix(HOME_MARKER)) {
            Some(cut) if cut.starts_with(truncator) => home.join(cut),
            _ => return path.to_path_buf(),
        }
    };
    if !rest.as_os_str().is_empty() {
        expanded.push(rest);
    }
    expanded
}

/// Substitutes the home directory prefix of an absolute path with `~`.
///
/// Matching is per component, so `/home/alicex` is not inside `/home/alice`.
/// A root home directory is never substituted.
pub fn substitute_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home.filter(|h| h.parent().is_some()) {
        if let Ok(rest) = path.strip_prefix(home) {
            if rest.as_os_str().is_empty() {
                return HOME_MARKER.to_string();
            }
            return format!(
                "{}{}{}",
                HOME_MARKER,
                std::path::MAIN_SEPARATOR,
                rest.to_string_lossy()
            );
        }
    }
    path.to_string_lossy().into_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn fixed_cwd() -> io::Result<PathBuf> {
        Ok(PathBuf::from("/work/dir"))
    }

    #[test]
    fn test_clean_resolves_dots_and_separators() {
        assert_eq!(clean(Path::new("/a//b/./c/../d/")), PathBuf::from("/a/b/d"));
        assert_eq!(clean(Path::new("/../..")), PathBuf::from("/"));
        assert_eq!(clean(Path::new("/")), PathBuf::from("/"));
        assert_eq!(clean(Path::new("a/../..")), PathBuf::from(".."));
        assert_eq!(clean(Path::new("")), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize_joins_relative_paths() {
        assert_eq!(
            absolutize(Path::new("../x/./y"), fixed_cwd).unwrap(),
            PathBuf::from("/work/x/y")
        );
        assert_eq!(
            absolutize(Path::new(""), fixed_cwd).unwrap(),
            PathBuf::from("/work/dir")
        );
    }

    #[test]
    fn test_absolutize_skips_cwd_for_absolute_paths() {
        let failing = || Err(io::Error::other("no cwd"));
        assert_eq!(
            absolutize(Path::new("/etc/../usr"), failing).unwrap(),
            PathBuf::from("/usr")
        );
        assert!(absolutize(Path::new("relative"), failing).is_err());
    }

    #[test]
    fn test_expand_home_only_expands_leading_marker() {
        let home = Path::new("/home/alice");
        assert_eq!(
            expand_home(Path::new("~/src"), Some(home), '…'),
            PathBuf::from("/home/alice/src")
        );
        assert_eq!(expand_home(Path::new("~"), Some(home), '…'), PathBuf::from("/home/alice"));
        assert_eq!(expand_home(Path::new("a/~"), Some(home), '…'), PathBuf::from("a/~"));
        assert_eq!(expand_home(Path::new("~src"), Some(home), '…'), PathBuf::from("~src"));
        assert_eq!(expand_home(Path::new("~/src"), None, '…'), PathBuf::from("~/src"));
    }

    #[test]
    fn test_expand_home_marker_joined_to_truncator() {
        let home = Path::new("/home/alice");
        assert_eq!(
            expand_home(Path::new("~…p"), Some(home), '…'),
            PathBuf::from("/home/alice/…p")
        );
        assert_eq!(expand_home(Path::new("~…"), Some(home), '…'), PathBuf::from("/home/alice/…"));
        assert_eq!(
            expand_home(Path::new("~*ct/app"), Some(home), '*'),
            PathBuf::from("/home/alice/*ct/app")
        );
        assert_eq!(expand_home(Path::new("~…p"), Some(home), '*'), PathBuf::from("~…p"));
    }

    #[test]
    fn test_substitute_home_is_component_aware() {
        let home = Some(Path::new("/home/alice"));
        assert_eq!(substitute_home(Path::new("/home/alice/projects/app"), home), "~/projects/app");
        assert_eq!(substitute_home(Path::new("/home/alice"), home), "~");
        assert_eq!(substitute_home(Path::new("/home/alicex/app"), home), "/home/alicex/app");
        assert_eq!(substitute_home(Path::new("/usr/bin"), None), "/usr/bin");
    }

    #[test]
    fn test_substitute_home_skips_root_home() {
        let root = Some(Path::new("/"));
        assert_eq!(substitute_home(Path::new("/usr/bin"), root), "/usr/bin");
        assert_eq!(substitute_home(Path::new("/"), root), "/");
    }
}
