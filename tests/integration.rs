use std::fs;
use std::path::Path;
use tempfile::tempdir;
use texsheet::output::{CLOSING, PREAMBLE};
use texsheet::{TexsheetBuilder, TexsheetError, collect_records, generate, generate_to_file};
fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
#[test]
fn integration_graph_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), "graphs/bfs.cpp", "#include <queue>\nint main() {\n}\n");
    write(dir.path(), "graphs/test/skip.cpp", "int main() {}\n");
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    assert_eq!(records.len(), 1);
    let bfs = &records[0];
    assert_eq!(bfs.display_name, "bfs.cpp");
    assert_eq!(bfs.display_type, "C++");
    assert_eq!(bfs.section_label, "Graph");
    assert_eq!(bfs.content.len(), 3);
    assert_eq!(bfs.path, dir.path().join("graphs").join("bfs.cpp"));

    let doc = generate(&options).unwrap();
    assert_eq!(doc.matches("\\section{Graph}").count(), 1);
    assert_eq!(doc.matches("\\subsection{bfs.cpp}").count(), 1);
    assert!(!doc.contains("skip.cpp"));
}
#[test]
fn integration_prunes_every_test_suffixed_directory() {
    let dir = tempdir().unwrap();
    write(dir.path(), "math/unit-test/gcd.cpp", "");
    write(dir.path(), "math/contest/deep/lcm.cpp", "");
    write(dir.path(), "test/string/kmp.cpp", "");
    write(dir.path(), "math/sieve.cpp", "");
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, ["sieve.cpp"]);
}
#[test]
fn integration_skips_unclassified_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "graphs/input.txt", "5 4\n");
    write(dir.path(), "graphs/dijkstra.h", "#pragma once\n");
    write(dir.path(), "dp/knapsack.py", "print(0)\n");
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_type, "Python");
    assert_eq!(records[0].section_label, "Other");
}
#[test]
fn integration_escapes_names_and_lines_but_not_paths() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "disjoint-set/union_find.cpp",
        "int parent[100];\nint find_root(int x);",
    );
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    let uf = &records[0];
    assert_eq!(uf.display_name, r"union\_find.cpp");
    assert_eq!(uf.section_label, "Disjoint Set");
    assert_eq!(
        uf.content,
        vec![
            "int parent\\lbrack 100\\rbrack ;\n".to_string(),
            r"int find\_root(int x);".to_string(),
        ]
    );
    assert!(uf.path.ends_with("union_find.cpp"));

    let doc = generate(&options).unwrap();
    assert!(doc.contains("\\subsection{union\\_find.cpp}"));
    assert!(doc.contains("disjoint-set/union_find.cpp\"}"));
}
#[test]
fn integration_sections_sorted_and_output_deterministic() {
    let dir = tempdir().unwrap();
    write(dir.path(), "math/gcd.cpp", "");
    write(dir.path(), "graphs/bfs.cpp", "");
    write(dir.path(), "misc/notes.md", "");
    write(dir.path(), "search/binary-search/lower.java", "");
    let options = TexsheetBuilder::new(dir.path()).build();
    let first = generate(&options).unwrap();
    let second = generate(&options).unwrap();
    assert_eq!(first, second);
    let positions: Vec<_> = ["Binary Search", "Graph", "Math", "Other"]
        .iter()
        .map(|label| first.find(&format!("\\section{{{}}}", label)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
#[test]
fn integration_empty_tree() {
    let dir = tempdir().unwrap();
    write(dir.path(), "graphs/README", "nothing here");
    let options = TexsheetBuilder::new(dir.path()).build();
    assert_eq!(generate(&options).unwrap(), format!("{}{}", PREAMBLE, CLOSING));
}
#[test]
fn integration_ignore_patterns() {
    let dir = tempdir().unwrap();
    write(dir.path(), "math/gcd.cpp", "");
    write(dir.path(), "math/scratch/try.cpp", "");
    let options = TexsheetBuilder::new(dir.path())
        .ignore_patterns(vec!["**/scratch".into()])
        .build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name, "gcd.cpp");
}
#[test]
fn integration_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let options = TexsheetBuilder::new(dir.path().join("code")).build();
    assert!(generate(&options).is_err());
}
#[test]
fn integration_nul_byte_snippet_is_read_as_text() {
    let dir = tempdir().unwrap();
    write(dir.path(), "string/kmp.cpp", "char s[] = \"a\0b\";\n");
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].section_label, "String");
    assert_eq!(
        records[0].content,
        vec!["char s\\lbrack \\rbrack  = \"a\0b\";\n".to_string()]
    );
}
#[test]
fn integration_unreadable_unclassified_file_is_fatal() {
    let dir = tempdir().unwrap();
    write(dir.path(), "graphs/bfs.cpp", "int main() {}\n");
    fs::write(dir.path().join("graphs").join("input.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let options = TexsheetBuilder::new(dir.path()).build();
    let err = generate(&options).unwrap_err();
    match err {
        TexsheetError::Io { path, source } => {
            assert!(path.ends_with("input.bin"));
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("unexpected error: {}", other),
    }
}
#[test]
fn integration_failed_walk_leaves_records_untouched() {
    let dir = tempdir().unwrap();
    write(dir.path(), "math/gcd.cpp", "int gcd(int a, int b);\n");
    fs::write(dir.path().join("math").join("zz.dat"), [0xc3, 0x28]).unwrap();
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    assert!(collect_records(&options, &mut records).is_err());
    assert!(records.is_empty());
}
#[test]
fn integration_line_endings_read_as_newlines() {
    let dir = tempdir().unwrap();
    write(dir.path(), "math/crlf.py", "a\r\nb\r\nc\rd");
    let options = TexsheetBuilder::new(dir.path()).build();
    let mut records = Vec::new();
    collect_records(&options, &mut records).unwrap();
    assert_eq!(records[0].content, vec!["a\n", "b\n", "c\n", "d"]);
}
#[test]
fn integration_write_to_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "code/fenwick/bit.cpp", "int bit[10];\n");
    let output = dir.path().join("out.tex");
    fs::write(&output, "stale").unwrap();
    let options = TexsheetBuilder::new(dir.path().join("code")).build();
    generate_to_file(&options, &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, generate(&options).unwrap());
    assert!(written.contains("\\section{Fenwick}"));
}
