//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// One embedded list: its source file, generated module name, and doc comment.
struct ListSpec {
    input_path: &'static str,
    const_name: &'static str,
    doc_comment: &'static str,
}

const LISTS: &[ListSpec] = &[
    ListSpec {
        input_path: "data/answers.txt",
        const_name: "ANSWERS",
        doc_comment: "Embedded answer word list (possible targets)",
    },
    ListSpec {
        input_path: "data/allowed_complete.txt",
        const_name: "ALLOWED",
        doc_comment: "Embedded guess word list (every permitted guess, superset of ANSWERS)",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for spec in LISTS {
        let output_path = Path::new(&out_dir).join(format!("{}.rs", spec.const_name.to_lowercase()));
        generate_word_list(spec.input_path, &output_path, spec.const_name, spec.doc_comment);
        println!("cargo:rerun-if-changed={}", spec.input_path);
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.lines().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
