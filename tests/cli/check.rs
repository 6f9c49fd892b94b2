use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

const BAD_SOURCE: &str = "\
int test_simple_uninit() {
    int x;
    int y = x + 1;  // ERROR: x is uninitialized
    return y;
}
";

#[test]
fn warns_with_source_echo_and_caret() -> Result<()> {
    let test = CliTest::with_file("test.c", BAD_SOURCE)?;

    let expected = "\
test.c:3:12: warning: use of possibly uninitialized variable 'x'
    int y = x + 1;  // ERROR: x is uninitialized
            ^
test.c: 1 warning(s)
";
    test.command()
        .arg("test.c")
        .assert()
        .failure()
        .code(1)
        .stdout(expected);

    Ok(())
}

#[test]
fn clean_file_reports_ok() -> Result<()> {
    let test = CliTest::with_file(
        "test.c",
        "int test() {\n    int x = 0;\n    return x + 1;\n}\n",
    )?;

    test.command()
        .arg("test.c")
        .assert()
        .success()
        .stdout("test.c: OK: no warnings\n");

    Ok(())
}

#[test]
fn no_paths_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn unreadable_file_reports_no_warnings_quirk() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("missing.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing.c: OK: no warnings"))
        .stderr(predicate::str::contains("Cannot open file"));

    Ok(())
}

#[test]
fn files_are_scanned_independently() -> Result<()> {
    let test = CliTest::with_file("first.c", "int x;\nint y = x + 1;\n")?;
    // `x` is never declared here, so nothing is tracked or reported.
    test.write_file("second.c", "int y = x + 1;\n")?;

    let expected = "\
first.c:2:8: warning: use of possibly uninitialized variable 'x'
int y = x + 1;
        ^
first.c: 1 warning(s)
second.c: OK: no warnings
";
    test.command()
        .arg("first.c")
        .arg("second.c")
        .assert()
        .failure()
        .stdout(expected);

    Ok(())
}

#[test]
fn caret_preserves_tabs_in_the_prefix() -> Result<()> {
    let test = CliTest::with_file("test.c", "int x;\n\tint y = x + 1;\n")?;

    test.command()
        .arg("test.c")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\n\t        ^\n"));

    Ok(())
}

#[test]
fn noisy_flag_reports_suppressed_contexts() -> Result<()> {
    let source = "int v;\nv[0] = w;\n";
    let test = CliTest::with_file("test.c", source)?;

    test.command()
        .arg("test.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no warnings"));

    test.command()
        .arg("--noisy")
        .arg("test.c")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "test.c:2:0: warning: use of possibly uninitialized variable 'v'",
        ));

    Ok(())
}

#[test]
fn directory_arguments_expand_to_c_family_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/bad.c", "int x;\nreturn x;\n")?;
    test.write_file("src/notes.txt", "int x;\nreturn x;\n")?;

    test.command()
        .arg("src")
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("bad.c: 1 warning(s)")
                .and(predicate::str::contains("notes.txt").not()),
        );

    Ok(())
}

#[test]
fn config_can_flip_the_default_mode() -> Result<()> {
    let test = CliTest::with_file("test.c", "int v;\nv[0] = w;\n")?;
    test.write_file(".uninitckrc.json", r#"{"noisy": true}"#)?;

    test.command()
        .arg("test.c")
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 warning(s)"));

    Ok(())
}

#[test]
fn config_extends_type_keywords() -> Result<()> {
    let test = CliTest::with_file("test.c", "size_t n;\nreturn n;\n")?;

    // Without the extra keyword, `size_t n;` is not a declaration and
    // nothing is tracked.
    test.command()
        .arg("test.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no warnings"));

    test.write_file(".uninitckrc.json", r#"{"typeKeywords": ["size_t"]}"#)?;
    test.command()
        .arg("test.c")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "use of possibly uninitialized variable 'n'",
        ));

    Ok(())
}

#[test]
fn invalid_config_is_a_hard_error() -> Result<()> {
    let test = CliTest::with_file("test.c", "int x = 0;\n")?;
    test.write_file(".uninitckrc.json", r#"{"ignores": ["[invalid"]}"#)?;

    test.command()
        .arg("test.c")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));

    Ok(())
}

#[test]
fn verbose_trace_goes_to_stderr_without_changing_warnings() -> Result<()> {
    let test = CliTest::with_file("test.c", BAD_SOURCE)?;

    let quiet = test.command().arg("test.c").assert().failure();
    let quiet_stdout = String::from_utf8(quiet.get_output().stdout.clone())?;

    let verbose = test.command().arg("-v").arg("test.c").assert().failure();
    let verbose_stdout = String::from_utf8(verbose.get_output().stdout.clone())?;
    let verbose_stderr = String::from_utf8(verbose.get_output().stderr.clone())?;

    assert_eq!(quiet_stdout, verbose_stdout);
    assert!(verbose_stderr.contains("trace:"));

    Ok(())
}

#[test]
fn full_fixture_pair_bad_and_good() -> Result<()> {
    let bad = "\
// Test case 1: obvious uninitialized variable use
int test_simple_uninit() {
    int x;
    int y = x + 1;  // ERROR: x is uninitialized
    return y;
}

// Test case 3: function use
void use_value(int val);

void test_param_uninit() {
    int a;
    use_value(a);  // ERROR: a is uninitialized
}
";
    let good = "\
int test_simple_uninit() {
    int x = 0;
    int y = x + 1;  // OK: x is initialized
    return y;
}

void use_value(int val);

void test_param_uninit() {
    int a = 0;
    use_value(a);  // OK: a is initialized
}
";
    let test = CliTest::with_file("bad.c", bad)?;
    test.write_file("good.c", good)?;

    test.command()
        .arg("bad.c")
        .arg("good.c")
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("bad.c:4:12: warning: use of possibly uninitialized variable 'x'")
                .and(predicate::str::contains(
                    "bad.c:13:14: warning: use of possibly uninitialized variable 'a'",
                ))
                .and(predicate::str::contains("bad.c: 2 warning(s)"))
                .and(predicate::str::contains("good.c: OK: no warnings")),
        );

    Ok(())
}
