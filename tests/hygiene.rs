//! Hygiene — source-level rules for code that runs inside forum pages.
//!
//! A panic in WebAssembly takes every helper on the page down with it, and a
//! swallowed web-sys error leaves nothing in the console. Each rule has a
//! budget (ideally zero). Budgets only ratchet down.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", max: 0, why: "panics abort the wasm instance" },
    Rule { pattern: ".expect(", max: 0, why: "panics abort the wasm instance" },
    Rule { pattern: "panic!(", max: 0, why: "panics abort the wasm instance" },
    Rule { pattern: "unreachable!(", max: 0, why: "panics abort the wasm instance" },
    Rule { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Rule { pattern: "let _ =", max: 0, why: "log or propagate DOM errors" },
    // Option conversions at the web-sys boundary.
    Rule { pattern: ".ok()", max: 6, why: "log or propagate DOM errors" },
    Rule { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    Rule { pattern: "set_inner_html(", max: 0, why: "messages are inserted as text" },
    Rule { pattern: "web_sys::console", max: 0, why: "log through the `log` facade" },
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(files: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);

    let failures: Vec<String> = RULES
        .iter()
        .filter_map(|rule| {
            let found = hits(&files, rule.pattern);
            (found.len() > rule.max).then(|| {
                format!(
                    "`{}` budget exceeded: found {}, max {} ({})\n{}",
                    rule.pattern,
                    found.len(),
                    rule.max,
                    rule.why,
                    found.join("\n")
                )
            })
        })
        .collect();

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}
