//! End-to-end tests running the g4make binary.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const JSON_POM: &str = r#"<project>
  <artifactId>json</artifactId>
  <name>JSON grammar</name>
  <build>
    <plugins>
      <plugin>
        <artifactId>antlr4-maven-plugin</artifactId>
        <configuration>
          <grammars>JSON.g4</grammars>
        </configuration>
      </plugin>
      <plugin>
        <artifactId>antlr4test-maven-plugin</artifactId>
        <configuration>
          <grammarName>JSON</grammarName>
          <entryPoint>json</entryPoint>
          <exampleFiles>examples/</exampleFiles>
        </configuration>
      </plugin>
    </plugins>
  </build>
</project>
"#;

fn g4make(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_g4make"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

/// A working directory holding `grammars-v4/json/pom.xml` and one example.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("grammars-v4/json");
    fs::create_dir_all(json.join("examples")).unwrap();
    fs::write(json.join("pom.xml"), JSON_POM).unwrap();
    fs::write(json.join("examples/example1.json"), "{}").unwrap();
    dir
}

#[test]
fn test_doc() {
    let dir = TempDir::new().unwrap();
    let output = g4make(dir.path(), &["doc", "json", "--no-format"]);
    assert!(output.status.success(), "{output:?}");

    let code = fs::read_to_string(dir.path().join("json/doc.go")).unwrap();
    assert!(code.starts_with("// Copyright 2017 Google Inc.\n"));
    assert!(code.ends_with("\npackage json // import \"bramp.net/antlr4/json\"\n"));
}

#[test]
fn test_doc_with_module() {
    let dir = TempDir::new().unwrap();
    let output = g4make(
        dir.path(),
        &["--no-format", "--module", "example.com/g", "doc", "sql"],
    );
    assert!(output.status.success(), "{output:?}");

    let code = fs::read_to_string(dir.path().join("sql/doc.go")).unwrap();
    assert!(code.contains("package sql // import \"example.com/g/sql\"\n"));
}

#[test]
fn test_test_file() {
    let dir = workspace();
    let output = g4make(
        dir.path(),
        &["test", "json", "grammars-v4/json/pom.xml", "JSON.g4", "--no-format"],
    );
    assert!(output.status.success(), "{output:?}");

    let code = fs::read_to_string(dir.path().join("json/json_test.go")).unwrap();
    assert!(code.contains("package json_test\n"));
    assert!(code.contains("\t\"grammars-v4/json/examples/example1.json\",\n"));
    assert!(code.contains("func TestJSONLexer(t *testing.T) {\n"));
    assert!(code.contains("func TestJSONParser(t *testing.T) {\n"));
}

const SQL_POM: &str = r#"<project>
  <artifactId>sql</artifactId>
  <build>
    <plugins>
      <plugin>
        <artifactId>antlr4test-maven-plugin</artifactId>
        <configuration>
          <grammarName>SQL</grammarName>
          <exampleFiles>examples</exampleFiles>
        </configuration>
      </plugin>
    </plugins>
  </build>
</project>
"#;

/// `grammars/sql` with a descriptor and one example.
fn nested_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let sql = dir.path().join("grammars/sql");
    fs::create_dir_all(sql.join("examples")).unwrap();
    fs::write(sql.join("pom.xml"), SQL_POM).unwrap();
    fs::write(sql.join("examples/a.sql"), "SELECT 1;").unwrap();
    dir
}

/// The example literals of a generated test, as the test would open them:
/// joined onto the parent of the package directory.
fn opened_examples(package_dir: &Path, code: &str) -> Vec<PathBuf> {
    let start = code.find("var examples = []string{\n").unwrap();
    let end = start + code[start..].find("\n}\n").unwrap();
    code[start..end]
        .lines()
        .skip(1)
        .map(|line| line.trim().trim_end_matches(',').trim_matches('"'))
        .map(|literal| package_dir.join("..").join(literal))
        .collect()
}

#[test]
fn test_examples_resolve_from_nested_output() {
    let dir = nested_workspace();
    let output = g4make(
        dir.path(),
        &["test", "grammars/sql", "grammars/sql/pom.xml", "--no-format"],
    );
    assert!(output.status.success(), "{output:?}");

    let package_dir = dir.path().join("grammars/sql");
    let code = fs::read_to_string(package_dir.join("sql_test.go")).unwrap();
    assert!(code.contains("\t\"sql/examples/a.sql\",\n"), "{code}");

    let opened = opened_examples(&package_dir, &code);
    assert_eq!(opened.len(), 1);
    assert!(opened[0].is_file(), "{}", opened[0].display());
}

#[test]
fn test_absolute_descriptor_emits_relative_examples() {
    let dir = nested_workspace();
    let root = dir.path().canonicalize().unwrap();
    let descriptor = root.join("grammars/sql/pom.xml");
    let output = g4make(
        &root,
        &["test", "grammars/sql", descriptor.to_str().unwrap(), "--no-format"],
    );
    assert!(output.status.success(), "{output:?}");

    let code = fs::read_to_string(root.join("grammars/sql/sql_test.go")).unwrap();
    assert!(code.contains("\t\"sql/examples/a.sql\",\n"), "{code}");
    assert!(!code.contains(root.to_str().unwrap()));
}

#[test]
fn test_keyword_package_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = g4make(dir.path(), &["doc", "type", "--no-format"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("type/doc.go").exists());
}

#[test]
fn test_regenerating_is_idempotent() {
    let dir = workspace();
    let args = ["test", "json", "grammars-v4/json/pom.xml", "--no-format"];

    assert!(g4make(dir.path(), &args).status.success());
    let first = fs::read(dir.path().join("json/json_test.go")).unwrap();
    assert!(g4make(dir.path(), &args).status.success());
    let second = fs::read(dir.path().join("json/json_test.go")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = g4make(dir.path(), &["--dry-run", "doc", "json"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("package json // import \"bramp.net/antlr4/json\""));
    assert!(!dir.path().join("json").exists());
}

#[test]
fn test_listener() {
    let dir = TempDir::new().unwrap();
    let output = g4make(
        dir.path(),
        &["listener", "json", "JSON", "json", "value", "--no-format"],
    );
    assert!(output.status.success(), "{output:?}");

    let interface = fs::read_to_string(dir.path().join("json/json_listener.go")).unwrap();
    assert!(interface.contains("\tEnterValue(c *ValueContext)\n"));
    assert!(dir.path().join("json/json_base_listener.go").exists());
}

#[test]
fn test_malformed_descriptor() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pom.xml"), "<project><artifactId>json</project>").unwrap();

    let output = g4make(dir.path(), &["test", "json", "pom.xml", "--no-format"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("json").exists());
}

#[test]
fn test_missing_descriptor() {
    let dir = TempDir::new().unwrap();
    let output = g4make(dir.path(), &["test", "json", "missing.xml", "--no-format"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("json").exists());
}

#[test]
fn test_usage_errors_exit_with_one() {
    let dir = TempDir::new().unwrap();

    let cases: [&[&str]; 3] = [&[], &["bogus", "json"], &["test", "json"]];
    for args in cases {
        let output = g4make(dir.path(), args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(!output.stderr.is_empty());
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failing_formatter_reports_an_error() {
    let dir = TempDir::new().unwrap();
    let output = g4make(dir.path(), &["--formatter", "false", "doc", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("false"), "{stderr}");
}
