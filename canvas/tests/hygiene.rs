//! Hygiene scan over the editor and its host UI.
//!
//! A panic inside the WASM bundle takes the customizer page down with it, so
//! production sources of both crates are scanned for panicking calls. The
//! engine is held to a stricter standard: it may not silently drop a
//! `Result` either. Budgets are zero and stay zero.

use std::fs;
use std::path::{Path, PathBuf};

/// A forbidden pattern and the number of occurrences tolerated.
struct Rule {
    pattern: &'static str,
    budget: usize,
}

const PANICS: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0 },
    Rule { pattern: ".expect(", budget: 0 },
    Rule { pattern: "panic!(", budget: 0 },
    Rule { pattern: "unreachable!(", budget: 0 },
    Rule { pattern: "todo!(", budget: 0 },
    Rule { pattern: "unimplemented!(", budget: 0 },
    Rule { pattern: "#[allow(dead_code)]", budget: 0 },
];

/// Error discards the engine must not use. The client's SSR stubs
/// legitimately discard unused arguments, so these apply to `canvas` only.
const ENGINE_DISCARDS: &[Rule] = &[
    Rule { pattern: "let _ =", budget: 0 },
    Rule { pattern: ".ok()", budget: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn crate_src(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Production `.rs` files under `dir`, skipping sibling `_test.rs` modules.
fn source_files(dir: &Path) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(dir, &mut files);
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file hit counts for `pattern`, ignoring `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(files: &[SourceFile], rules: &[Rule]) {
    let mut failures = Vec::new();
    for rule in rules {
        let found = hits(files, rule.pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > rule.budget {
            let listing: Vec<String> = found.iter().map(|(path, count)| format!("    {path}: {count}")).collect();
            failures.push(format!("  `{}`: found {total}, max {}\n{}", rule.pattern, rule.budget, listing.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn sources_are_found() {
    assert!(!source_files(&crate_src("src")).is_empty());
    assert!(!source_files(&crate_src("../client/src")).is_empty());
}

#[test]
fn engine_never_panics() {
    check(&source_files(&crate_src("src")), PANICS);
}

#[test]
fn engine_never_discards_errors() {
    check(&source_files(&crate_src("src")), ENGINE_DISCARDS);
}

#[test]
fn client_never_panics() {
    check(&source_files(&crate_src("../client/src")), PANICS);
}
