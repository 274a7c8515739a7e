// src/output/paths.rs
//! Pure functions for output filenames. No I/O happens here.

use crate::types::EntryId;
use std::path::{Path, PathBuf};

/// Filename of an entry's article page, also used as the index link target.
pub fn article_filename(id: &EntryId) -> String {
    format!("article-{}.html", id.as_str())
}

/// Where an entry's article page is written.
pub fn article_path(output_dir: &Path, id: &EntryId) -> PathBuf {
    output_dir.join(article_filename(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_entry_id_verbatim() {
        let id = EntryId::new("1a2b3c4d-0000-4000-8000-abcdefabcdef").unwrap();
        assert_eq!(
            article_filename(&id),
            "article-1a2b3c4d-0000-4000-8000-abcdefabcdef.html"
        );
    }

    #[test]
    fn path_is_inside_output_dir() {
        let path = article_path(Path::new("public"), &EntryId::new("abc").unwrap());
        assert_eq!(path, PathBuf::from("public/article-abc.html"));
    }
}
