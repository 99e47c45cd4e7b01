use crate::utils::error::{Result, SvgstoreError};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Recursively enumerates `root` into a flat list of relative paths.
///
/// At each level, subdirectories come first (each expanded depth-first and
/// spliced in at its sorted position), then regular files. Both partitions
/// use case-insensitive natural ordering. A subdirectory that yields nothing
/// contributes no paths and never appears itself.
pub fn walk(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|_| SvgstoreError::NotADirectory {
        path: root.display().to_string(),
    })?;

    let mut folders = Vec::new();
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if path.is_dir() {
            folders.push(name);
        } else if path.is_file() {
            files.push(name);
        }
    }

    folders.sort_by(|a, b| natural_cmp(a, b));
    files.sort_by(|a, b| natural_cmp(a, b));

    let mut output = Vec::new();
    for folder in &folders {
        // Inaccessible subdirectories contribute nothing.
        if let Ok(map) = walk(&root.join(folder)) {
            output.extend(map.into_iter().map(|p| format!("{}/{}", folder, p)));
        }
    }
    output.append(&mut files);

    Ok(output)
}

/// Case-insensitive string comparison that treats digit runs as numbers, so
/// `img2` sorts before `img10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i].is_ascii_digit() && right[j].is_ascii_digit() {
            let (va, ni) = take_number(&left, i);
            let (vb, nj) = take_number(&right, j);
            match va.cmp(&vb) {
                Ordering::Equal => {
                    i = ni;
                    j = nj;
                }
                other => return other,
            }
        } else {
            let ca = left[i].to_ascii_lowercase();
            let cb = right[j].to_ascii_lowercase();
            match ca.cmp(&cb) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    // Shared prefix exhausted: shorter string first, raw bytes as tiebreak
    // to keep the ordering total.
    match (left.len() - i).cmp(&(right.len() - j)) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn take_number(chars: &[char], mut idx: usize) -> (u128, usize) {
    let mut value: u128 = 0;
    while idx < chars.len() && chars[idx].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(chars[idx] as u128 - '0' as u128);
        idx += 1;
    }
    (value, idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_natural_cmp_digit_runs() {
        assert_eq!(natural_cmp("img1", "img2"), Ordering::Less);
        assert_eq!(natural_cmp("img2", "img10"), Ordering::Less);
        assert_eq!(natural_cmp("img10", "img10"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("BANANA", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_prefix() {
        assert_eq!(natural_cmp("arrow", "arrow-left"), Ordering::Less);
    }

    #[test]
    fn test_walk_sorts_naturally() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "img10.svg");
        touch(tmp.path(), "img2.svg");
        touch(tmp.path(), "img1.svg");

        let list = walk(tmp.path()).unwrap();
        assert_eq!(list, vec!["img1.svg", "img2.svg", "img10.svg"]);
    }

    #[test]
    fn test_walk_folders_before_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.svg");
        fs::create_dir(tmp.path().join("z")).unwrap();
        touch(&tmp.path().join("z"), "nested.svg");

        let list = walk(tmp.path()).unwrap();
        assert_eq!(list, vec!["z/nested.svg", "a.svg"]);
    }

    #[test]
    fn test_walk_expands_directories_fully() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("b/deep")).unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        touch(&tmp.path().join("a"), "one.svg");
        touch(&tmp.path().join("b/deep"), "two.svg");
        touch(tmp.path(), "top.svg");

        let list = walk(tmp.path()).unwrap();
        assert_eq!(list, vec!["a/one.svg", "b/deep/two.svg", "top.svg"]);
        // No directory name appears standalone in the output.
        assert!(list.iter().all(|p| p.ends_with(".svg")));
    }

    #[test]
    fn test_walk_empty_directory_contributes_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();
        touch(tmp.path(), "a.svg");

        let list = walk(tmp.path()).unwrap();
        assert_eq!(list, vec!["a.svg"]);
    }

    #[test]
    fn test_walk_empty_root() {
        let tmp = TempDir::new().unwrap();
        assert!(walk(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_walk_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            walk(&missing),
            Err(SvgstoreError::NotADirectory { .. })
        ));
    }
}
