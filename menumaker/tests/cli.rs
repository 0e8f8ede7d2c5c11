use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn menumaker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_menumaker"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("menumaker should start")
}

fn write_menu(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("menu.json");
    fs::write(&path, content).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_renders_nested_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(
        dir.path(),
        r#"{"text": "Home", "nodes": [{"text": "A", "href": "/a"}]}"#,
    );
    let output = menumaker(&[path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<nav id='nav'>\n\
         \t<a>Home</a>\n\
         \t<ul>\n\
         \t\t<li>\n\
         \t\t\t\t<a href=\"/a\">A</a>\n\
         \t\t</li>\n\
         \t</ul>\n\
         </nav>\n"
    );
}

#[test]
fn test_deep_menu_arrows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(
        dir.path(),
        r#"{"text": "a", "class_list": ["top"], "nodes": [
            {"text": "b", "id": "b", "nodes": [
                {"text": "c", "nodes": [{"text": "d", "href": "/d", "class_list": ["x", "y"]}]}
            ]}
        ]}"#,
    );
    let output = menumaker(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\n\t<a class=\"top\">a</a>\n"));
    assert!(out.contains("\n\t\t\t<a class=\"downarrow\" id=\"b\">b</a>\n"));
    assert!(out.contains("\n\t\t\t\t\t<a class=\"rightarrow\">c</a>\n"));
    assert!(out.contains("\n\t\t\t\t\t\t\t\t<a class=\"x y\" href=\"/d\">d</a>\n"));
}

#[test]
fn test_invalid_json_fails_without_markup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#"{"text": "A", "href": "/a",}"#);
    let output = menumaker(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("trailing comma"));
}

#[test]
fn test_bare_scalar_not_a_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#""hello""#);
    let output = menumaker(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Attempting to parse as a leaf: \"hello\" isn't a dict."));
    assert!(err.contains("Not a valid JSON menu."));
}

#[test]
fn test_unknown_key_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#"{"text": "x", "href": "y", "bogus": 1}"#);
    let output = menumaker(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Key \"bogus\" isn't allowed"));
}

#[test]
fn test_missing_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let output = menumaker(&[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_action_variant() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(
        dir.path(),
        r#"{"text": "Edit", "nodes": [{"text": "Undo", "func": "undo"}]}"#,
    );
    let output = menumaker(&[path.to_str().unwrap(), "--variant", "action"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\t<span>Edit</span>\n"));
    assert!(out.contains("\t\t\t\t<span data-func=\"undo\">Undo</span>\n"));

    let output = menumaker(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_action_variant_reports_no_reasons() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#"{"text": "Undo", "func": "undo", "id": "u"}"#);
    let output = menumaker(&[path.to_str().unwrap(), "--variant", "action"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(!err.contains("Attempting to parse"));
    assert!(err.contains("Not a valid JSON menu."));
}

#[test]
fn test_disabled_variant_from_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("menumaker.toml"), "variant = \"disabled\"\n").unwrap();
    let path = write_menu(
        dir.path(),
        r#"{"text": "a", "nodes": [{"text": "b", "nodes": [{"text": "c", "href": "/c", "disabled": true}]}]}"#,
    );
    let output = menumaker(&[path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("\t\t\t<a href=\"downarrow\">b</a>\n"));
    assert!(out.contains("<a class=\"disabled\" href=\"/c\">c</a>"));

    let output = menumaker(&[path.to_str().unwrap(), "--arrow-slot", "class"]);
    assert!(stdout(&output).contains("\t\t\t<a class=\"downarrow\">b</a>\n"));
}

#[test]
fn test_check_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#"{"text": "A", "href": "/a"}"#);
    let output = menumaker(&[path.to_str().unwrap(), "--check"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(dir.path(), r#"{"text": "A", "href": "/a"}"#);
    let html = dir.path().join("menu.html");
    let output = menumaker(&[path.to_str().unwrap(), "-o", html.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(html).unwrap(),
        "<nav id='nav'>\n\t\t<a href=\"/a\">A</a>\n</nav>\n"
    );
}

#[test]
fn test_output_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_menu(
        dir.path(),
        r#"{"text": "m", "nodes": [{"text": "a", "href": "/a"}, {"text": "s", "nodes": []}]}"#,
    );
    let first = menumaker(&[path.to_str().unwrap()]);
    let second = menumaker(&[path.to_str().unwrap()]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_print_config_schema() {
    let output = menumaker(&["--print-config-schema"]);
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"]["variant"].is_object());
}

#[test]
fn test_deeply_nested_menu_renders() {
    let dir = tempfile::tempdir().unwrap();
    let mut text = r#"{"text": "end", "href": "/end"}"#.to_string();
    for _ in 0..100 {
        text = format!(r#"{{"text": "p", "nodes": [{text}]}}"#);
    }
    let path = write_menu(dir.path(), &text);
    let output = menumaker(&[path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let leaf = format!("{}<a href=\"/end\">end</a>\n", "\t".repeat(202));
    assert!(stdout(&output).contains(&leaf));
}
