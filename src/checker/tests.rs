use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::TempDir;

use super::{
    checker::{check_file, check_source, read_source, run, Summary},
    config::Config,
};
use crate::{
    advisories::advisories::Category,
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::sanitize::Sanitizer,
    matcher::matcher::MatchMode,
};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn run_to_string(config: &Config) -> (Result<Summary, crate::errors::errors::Error>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_check_source_reports_deprecated_and_cautionary() {
    let matcher = Config::new(".").matcher();
    let findings = check_source(
        "void f() {\n  char *p = (char *)alloca(8);\n  gets(p);\n}\n",
        "f.c",
        &matcher,
        &Sanitizer::default(),
    )
    .unwrap();

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].category, Category::Cautionary);
    assert_eq!(findings[1].line, 3);
    assert_eq!(
        findings[1].to_string(),
        "f.c: line 3 - gets is removed in the C11 and C++11 standards."
    );
}

#[test]
fn test_check_source_without_cautionary() {
    let mut config = Config::new(".");
    config.cautionary = false;

    let findings = check_source("alloca(8);", "f.c", &config.matcher(), &Sanitizer::default()).unwrap();

    assert!(findings.is_empty());
}

#[test]
fn test_check_source_substring_mode() {
    let mut config = Config::new(".");
    config.match_mode = MatchMode::Substring;

    let findings = check_source("my_gets_wrapper();", "f.c", &config.matcher(), &Sanitizer::default()).unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].identifier, "gets");
}

#[test]
fn test_check_source_propagates_parse_error() {
    let matcher = Config::new(".").matcher();
    let error = check_source("/* a /* b */", "bad.c", &matcher, &Sanitizer::default()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_check_file_and_read_source() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.cpp", "std::auto_ptr<int> p;\n");
    let path = dir.path().join("a.cpp");

    let findings = check_file(&path, &Config::new(".").matcher(), &Sanitizer::default()).unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].identifier, "auto_ptr");
    assert_eq!(findings[0].file, path.display().to_string());
}

#[test]
fn test_read_source_is_lossy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.c");
    fs::write(&path, b"/* caf\xe9 */ gets(b);\n").unwrap();

    let source = read_source(&path).unwrap();

    assert!(source.contains("gets(b);"));
}

#[test]
fn test_read_source_missing_file() {
    let dir = TempDir::new().unwrap();
    let error = read_source(&dir.path().join("gone.c")).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(error.to_string().contains("gone.c"));
}

#[test]
fn test_run_writes_one_line_per_finding() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.c", "int main() { return 0; } // uses gets\n");
    write(dir.path(), "b.c", "void g(char *s) {\n  bzero(s, 4);\n}\n");
    write(dir.path(), "notes.txt", "gets gets gets\n");

    let (result, output) = run_to_string(&Config::new(dir.path()));
    let summary = result.unwrap();

    assert_eq!(
        summary,
        Summary {
            files_scanned: 2,
            files_failed: 0,
            findings: 1,
        }
    );
    let b = dir.path().join("b.c");
    assert_eq!(
        output,
        format!(
            "{}: line 2 - bzero is a POSIX standard function, and is removed as of POSIX.1-2008. Consider using memset instead.\n",
            b.display()
        )
    );
}

#[test]
fn test_run_missing_root_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let (result, output) = run_to_string(&Config::new(dir.path().join("missing")));

    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Usage);
    assert!(matches!(error.get_impl(), ErrorImpl::RootNotFound { .. }));
    assert!(output.is_empty());
}

#[test]
fn test_run_rejects_empty_extensions() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::new(dir.path());
    config.extensions = vec![];

    let (result, _) = run_to_string(&config);

    assert!(matches!(
        result.unwrap_err().get_impl(),
        ErrorImpl::InvalidArgument { .. }
    ));
}

#[test]
fn test_run_rejects_identifier_separators() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::new(dir.path());
    config.sanitize.separators = String::from("(_)");

    let (result, _) = run_to_string(&config);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Usage);
}

#[test]
fn test_run_aborts_on_parse_error_by_default() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.c", "/* never closed\n");
    write(dir.path(), "b.c", "gets(s);\n");

    let (result, output) = run_to_string(&Config::new(dir.path()));

    let error = result.unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedBlockComment);
    assert!(output.is_empty());
}

#[test]
fn test_run_keep_going_skips_bad_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.c", "/* outer /* inner */ */\n");
    write(dir.path(), "b.c", "gets(s);\n");

    let mut config = Config::new(dir.path());
    config.keep_going = true;
    let (result, output) = run_to_string(&config);

    let summary = result.unwrap();
    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.findings, 1);
    assert!(output.contains("b.c: line 1 - gets"));
}

#[test]
fn test_run_single_file_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "legacy.inl", "std::ostrstream os;\n");

    let (result, output) = run_to_string(&Config::new(dir.path().join("legacy.inl")));

    assert_eq!(result.unwrap().findings, 1);
    assert!(output.contains("ostrstream is deprecated"));
}

#[test]
fn test_run_non_recursive() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "top.c", "int ok;\n");
    write(dir.path(), "sub/deep.c", "gets(s);\n");

    let mut config = Config::new(dir.path());
    config.recursive = false;
    let (result, output) = run_to_string(&config);

    assert_eq!(result.unwrap().files_scanned, 1);
    assert!(output.is_empty());
}

#[test]
fn test_run_dump_tokens() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "t.c", "int x; // gone\ny = \"s\";\n");

    let mut config = Config::new(dir.path());
    config.dump_tokens = true;
    let (result, output) = run_to_string(&config);

    assert_eq!(result.unwrap().findings, 0);
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].ends_with("t.c:"));
    assert_eq!(&lines[1..], &["    1 | int", "    1 | x", "    2 | y"]);
}

struct BrokenPipe {
    written: Vec<u8>,
}

impl Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }
}

#[test]
fn test_run_reports_failed_flush() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.c", "gets(s);\n");

    let mut out = BrokenPipe { written: vec![] };
    let error = run(&Config::new(dir.path()), &mut out).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(matches!(error.get_impl(), ErrorImpl::WriteFailed { .. }));
    assert!(error.to_string().contains("reader went away"));
    assert!(String::from_utf8(out.written).unwrap().contains("line 1 - gets"));
}
