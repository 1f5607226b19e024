//! Hygiene: coding standards enforced at test time.
//!
//! Scans the production sources of the richtext crate for patterns that can
//! panic inside the editor or silently swallow errors. Every budget is zero;
//! the document model is pure and has no excuse for either.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

/// Patterns that panic at runtime.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or match instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or match instead" },
    Budget { pattern: "panic!(", max: 0, why: "return an error" },
    Budget { pattern: "unreachable!(", max: 0, why: "encode the invariant in types" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

/// Patterns that drop errors without looking at them.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "handle or log the result" },
    Budget { pattern: ".ok()", max: 0, why: "match on the error explicitly" },
];

/// Structural smells.
const STRUCTURE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the dead code" },
    Budget { pattern: "println!(", max: 0, why: "a library must not write to stdout" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; sibling `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
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

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the richtext crate root");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file.content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > budget.max {
            let listing = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {total}, max {} ({}).\n{listing}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn discard_budgets() {
    check(DISCARDS);
}

#[test]
fn structure_budgets() {
    check(STRUCTURE);
}
