use std::path::{Path, PathBuf};

// Expand a leading `~` to the home directory
pub fn expand_home(raw: &str) -> PathBuf {
    let Some(rest) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };

    if !rest.is_empty() && !rest.starts_with('/') {
        // `~user/...` is left alone
        return PathBuf::from(raw);
    }

    match home::home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(raw),
    }
}

// Directory a temporary file must live in to be renamed over `path`
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_plain_paths() {
        assert_eq!(expand_home("/tmp/cache.json"), PathBuf::from("/tmp/cache.json"));
        assert_eq!(expand_home("cache.json"), PathBuf::from("cache.json"));
        assert_eq!(expand_home("~other/cache.json"), PathBuf::from("~other/cache.json"));
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = home::home_dir() {
            assert_eq!(expand_home("~/cache.json"), home.join("cache.json"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("/tmp/cache.json")), Path::new("/tmp"));
        assert_eq!(parent_dir(Path::new("cache.json")), Path::new("."));
    }
}
