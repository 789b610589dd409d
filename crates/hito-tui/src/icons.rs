//! Nerd Font icon mapping for file entries.

use hito_core::FileEntry;

/// Returns a Nerd Font icon (with trailing space) for the given entry.
pub fn icon_for_entry(entry: &FileEntry) -> &'static str {
    if entry.is_parent_sentinel() {
        return "\u{f062} "; // arrow up
    }
    if entry.is_dir() {
        return "\u{f07b} "; // folder
    }
    if entry.is_symlink() {
        return "\u{f0c1} "; // link
    }

    let ext = entry
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    icon_for_extension(ext)
}

/// Plain-text marker used when icons are disabled.
pub fn marker_for_entry(entry: &FileEntry) -> &'static str {
    if entry.is_dir() {
        "/"
    } else {
        " "
    }
}

fn icon_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "rs" => "\u{e7a8} ",
        "go" => "\u{e724} ",
        "py" => "\u{e73c} ",
        "js" | "ts" => "\u{e74e} ",
        "c" | "h" | "cpp" | "hpp" => "\u{e61e} ",
        "sh" | "bash" | "zsh" => "\u{f489} ",
        "toml" | "yaml" | "yml" | "ini" | "conf" => "\u{e615} ",
        "json" => "\u{e60b} ",
        "md" | "markdown" => "\u{e73e} ",
        "txt" | "log" => "\u{f15c} ",
        "zip" | "tar" | "gz" | "xz" | "7z" => "\u{f410} ",
        "png" | "jpg" | "jpeg" | "gif" | "webp" => "\u{f1c5} ",
        "pdf" => "\u{f1c1} ",
        _ => "\u{f15b} ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_file(tmp: &TempDir, name: &str) -> FileEntry {
        let path = tmp.path().join(name);
        fs::write(&path, "").unwrap();
        let meta = fs::metadata(&path).unwrap();
        FileEntry::new(path, &meta)
    }

    #[test]
    fn dir_gets_folder_icon() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("src");
        fs::create_dir(&path).unwrap();
        let entry = FileEntry::new(path.clone(), &fs::metadata(&path).unwrap());
        assert_eq!(icon_for_entry(&entry), "\u{f07b} ");
        assert_eq!(marker_for_entry(&entry), "/");
    }

    #[test]
    fn parent_sentinel_gets_up_arrow() {
        let entry = FileEntry::parent_sentinel(PathBuf::from("/"));
        assert_eq!(icon_for_entry(&entry), "\u{f062} ");
    }

    #[test]
    fn rust_file_gets_rust_icon() {
        let tmp = TempDir::new().unwrap();
        let entry = make_file(&tmp, "main.rs");
        assert_eq!(icon_for_entry(&entry), "\u{e7a8} ");
        assert_eq!(marker_for_entry(&entry), " ");
    }

    #[test]
    fn extension_match_ignores_case() {
        let tmp = TempDir::new().unwrap();
        let entry = make_file(&tmp, "PHOTO.PNG");
        assert_eq!(icon_for_entry(&entry), "\u{f1c5} ");
    }

    #[test]
    fn unknown_ext_gets_default_icon() {
        let tmp = TempDir::new().unwrap();
        let entry = make_file(&tmp, "data.xyz");
        assert_eq!(icon_for_entry(&entry), "\u{f15b} ");
    }
}
