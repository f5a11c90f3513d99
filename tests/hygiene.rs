//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree for antipatterns. Every pattern has a
//! budget of zero; test files (`*_test.rs`) are exempt. If a pattern ever
//! needs a nonzero budget, fix an existing hit first — budgets never grow.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding sibling test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found — is the test running from the crate root?");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(files: &[SourceFile], pattern: &str, what: &str) {
    let hits = hits_for(files, pattern);
    let total: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(total == 0, "{what} budget exceeded: found {total}, max 0.\n{listing}");
}

// Panics crash the host; production code propagates instead.
#[test]
fn no_panicking_constructs() {
    let files = source_files();
    for (pattern, what) in [
        (".unwrap()", ".unwrap()"),
        (".expect(", ".expect()"),
        ("panic!(", "panic!()"),
        ("unreachable!(", "unreachable!()"),
        ("todo!(", "todo!()"),
        ("unimplemented!(", "unimplemented!()"),
    ] {
        assert_budget(&files, pattern, what);
    }
}

// Discarding results hides failures from callers.
#[test]
fn no_silent_error_loss() {
    let files = source_files();
    for (pattern, what) in [("let _ =", "let _ ="), (".ok()", ".ok()")] {
        assert_budget(&files, pattern, what);
    }
}

// Dead code hides unfinished adaptation.
#[test]
fn no_dead_code_allowances() {
    let files = source_files();
    assert_budget(&files, "#[allow(dead_code)]", "#[allow(dead_code)]");
}
