//! Integration tests for cppm-core.

use std::path::{Path, PathBuf};

use cppm_adapters::{MemoryFilesystem, ScriptedConsole, StdioConsole};
use cppm_core::{
    application::{DEFAULT_SEED, prompts},
    prelude::*,
};

fn target() -> PathBuf {
    PathBuf::from("proj/src/main.cpp")
}

fn run(fs: &MemoryFilesystem, script: &[&str]) -> (SessionSummary, ScriptedConsole) {
    let mut console = ScriptedConsole::new(script.iter().copied());
    let summary = EditSession::new(fs, &mut console).run(&target()).unwrap();
    (summary, console)
}

#[test]
fn test_function_session_on_new_file() {
    let fs = MemoryFilesystem::new();

    let (summary, console) = run(
        &fs,
        &["function add", "adds", "int", "a int", "b int", "", "quit"],
    );

    assert!(summary.created);
    assert_eq!(summary.appended, 1);
    assert_eq!(
        fs.read_file(&target()).unwrap(),
        "#include <iostream>\n\nint add(int a, int b) {\n// adds\n    // Write your code\n}\n\n"
    );
    assert!(console.notices()[0].message().starts_with("Created"));
}

#[test]
fn test_class_with_attributes_and_methods() {
    let fs = MemoryFilesystem::new().with_file(target(), "");

    run(
        &fs,
        &[
            "class Point",
            "a 2d point",
            "x double",
            "y double",
            "",
            "length",
            "euclidean norm",
            "double",
            "",
            "scale",
            "multiply in place",
            "void",
            "factor double",
            "",
            "",
            "quit",
        ],
    );

    let expected = "\
class Point {
// a 2d point
public:
    double x;
    double y;
\tdouble length() {
\t// euclidean norm
\t    // Write your code
\t}
\tvoid scale(double factor) {
\t// multiply in place
\t    // Write your code
\t}
};

";
    assert_eq!(fs.read_file(&target()).unwrap(), expected);
}

#[test]
fn test_empty_struct_renders_frame_only() {
    let fs = MemoryFilesystem::new().with_file(target(), "");

    run(&fs, &["struct Empty", "nothing yet", "", "", "quit"]);

    assert_eq!(
        fs.read_file(&target()).unwrap(),
        "struct Empty {\n// nothing yet\npublic:\n};\n\n"
    );
}

#[test]
fn test_existing_content_is_preserved_and_not_reseeded() {
    let fs = MemoryFilesystem::new().with_file(target(), "// mine\n");

    let (summary, _) = run(&fs, &["function f", "", "void", "", "quit"]);

    assert!(!summary.created);
    let content = fs.read_file(&target()).unwrap();
    assert!(content.starts_with("// mine\nvoid f() {"));
    assert!(!content.contains(DEFAULT_SEED));
}

#[test]
fn test_identical_declarations_are_both_appended_in_order() {
    let fs = MemoryFilesystem::new().with_file(target(), "");
    let decl = ["function f", "same", "void", ""];

    let script: Vec<&str> = decl
        .iter()
        .chain(decl.iter())
        .chain(["function g", "other", "int", "", "quit"].iter())
        .copied()
        .collect();
    let (summary, _) = run(&fs, &script);

    assert_eq!(summary.appended, 3);
    let content = fs.read_file(&target()).unwrap();
    assert_eq!(content.matches("void f() {").count(), 2);
    assert!(content.rfind("void f() {").unwrap() < content.find("int g() {").unwrap());
}

#[test]
fn test_errors_are_recovered_at_their_prompt() {
    let fs = MemoryFilesystem::new().with_file(target(), "");

    let (summary, console) = run(
        &fs,
        &[
            "method foo",     // unrecognized keyword
            "class",          // missing name
            "function sum",   //
            "",               // description
            "int",            // return type
            "broken",         // malformed parameter
            "values int*",    //
            "",               //
            "quit",
        ],
    );

    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.appended, 1);
    assert_eq!(console.errors().len(), 3);
    assert!(console.errors()[2].contains("expected 'name type'"));
    assert!(
        fs.read_file(&target())
            .unwrap()
            .starts_with("int sum(int* values) {")
    );

    let parameter_prompts = console
        .prompts()
        .iter()
        .filter(|p| p.as_str() == prompts::PARAMETER)
        .count();
    assert_eq!(parameter_prompts, 3);
}

#[test]
fn test_unwritable_target_loses_declaration_but_session_continues() {
    let fs = MemoryFilesystem::new().with_file(target(), "");
    fs.deny_writes(target());

    let (summary, console) = run(
        &fs,
        &["function a", "", "void", "", "function b", "", "void", "", "quit"],
    );

    assert_eq!(summary.failed, 2);
    assert_eq!(fs.read_file(&target()).as_deref(), Some(""));
    assert!(console.errors().iter().all(|e| e.contains("Permission denied")));
    assert_eq!(console.remaining(), 0);
}

#[test]
fn test_end_of_input_inside_a_declaration_still_emits_it() {
    let fs = MemoryFilesystem::new().with_file(target(), "");

    let (summary, _) = run(&fs, &["function f", "desc"]);

    assert_eq!(summary.appended, 1);
    // Return type and parameters fall back to empty.
    assert_eq!(
        fs.read_file(&target()).unwrap(),
        " f() {\n// desc\n    // Write your code\n}\n\n"
    );
}

#[test]
fn test_session_over_stdio_console() {
    let fs = MemoryFilesystem::new();
    let input = "function hello\ngreets\nvoid\n\nquit\n";
    let mut console = StdioConsole::new(input.as_bytes(), Vec::new());

    let summary = EditSession::new(&fs, &mut console)
        .run(Path::new("hello.cpp"))
        .unwrap();
    assert_eq!(summary.appended, 1);

    let transcript = String::from_utf8(console.into_writer()).unwrap();
    assert!(transcript.starts_with("Created hello.cpp\n"));
    assert!(transcript.contains(prompts::DECLARATION));
    assert!(transcript.contains(prompts::RETURN_TYPE));
    assert!(transcript.contains("Added function hello to hello.cpp"));
}

#[test]
fn test_target_that_cannot_be_created_keeps_the_session_alive() {
    let fs = MemoryFilesystem::new();
    let target = PathBuf::from("ro/main.cpp");
    fs.deny_writes(target.clone());

    let mut console = ScriptedConsole::new(["function f", "d", "void", "", "quit"]);
    let summary = EditSession::new(&fs, &mut console).run(&target).unwrap();

    assert!(!summary.created);
    assert_eq!(summary.failed, 2);
    assert_eq!(console.prompts()[0], prompts::DECLARATION);
    assert_eq!(console.errors().len(), 2);
    assert!(console.errors()[0].contains("Permission denied"));
    assert_eq!(console.remaining(), 0);
    assert_eq!(fs.read_file(&target), None);
}
