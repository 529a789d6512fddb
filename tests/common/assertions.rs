//! Assertions over a generated output directory

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Every file under `dir`, keyed by path relative to `dir`
pub fn read_output(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (relative, std::fs::read(entry.path()).unwrap())
        })
        .collect()
}

/// Assert the output holds exactly one page per id plus `index.html`
pub fn assert_pages_for(dir: &Path, ids: &[&str]) {
    let files = read_output(dir);
    let mut expected: Vec<String> = ids.iter().map(|id| format!("episode-{id}.html")).collect();
    expected.push("index.html".to_string());
    expected.sort();

    let actual: Vec<String> = files.keys().cloned().collect();
    assert_eq!(actual, expected, "unexpected output files in {}", dir.display());
}

/// Episode links in the index, in document order
pub fn index_links(dir: &Path) -> Vec<String> {
    let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
    index
        .match_indices("href=\"episode-")
        .map(|(start, _)| {
            let rest = &index[start + "href=\"".len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

/// Read one generated page as text
pub fn read_page(dir: &Path, file_name: &str) -> String {
    std::fs::read_to_string(dir.join(file_name))
        .unwrap_or_else(|e| panic!("cannot read {file_name}: {e}"))
}
