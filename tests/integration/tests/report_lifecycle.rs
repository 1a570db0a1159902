//! End-to-end runs: config -> engine -> reporter -> CheckStyle XML.

use pretty_assertions::assert_eq;

use sollint_core::{CheckstyleReporter, Diagnostic, Linter, LinterConfig, RuleOption};
use sollint_parser::ContractParser;

fn reporter() -> CheckstyleReporter<Vec<u8>, Vec<u8>> {
    CheckstyleReporter::new(Vec::new(), Vec::new())
}

fn linter_from_json(json: &str) -> Linter<ContractParser> {
    let config = LinterConfig::from_json(json).unwrap();
    Linter::new(&config, ContractParser::new()).unwrap()
}

#[test]
fn full_run_produces_checkstyle_document() {
    let linter = linter_from_json(r#"{ "rules": { "long-lines": { "max": 20 } } }"#);
    let mut reporter = reporter();

    let summary = linter
        .run_sources(
            &[
                ("contracts/Short.sol", "contract c {}"),
                ("contracts/Long.sol", "contract a_very_long_contract_name {}"),
            ],
            &mut reporter,
        )
        .unwrap();

    assert_eq!(summary.files_checked, 2);
    assert_eq!(summary.files_with_findings, 1);
    assert_eq!(summary.fatal_errors, 0);

    let output = String::from_utf8(reporter.into_output()).unwrap();
    assert_eq!(
        output,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><checkstyle version=\"4.3\">\
         <file name=\"contracts/Short.sol\"></file>\
         <file name=\"contracts/Long.sol\">\
         <error line=\"1\" column=\"0\" severity=\"warning\" \
         message=\"line is longer than 20 characters (long-lines)\" \
         source=\"long-lines\" />\
         </file></checkstyle>"
    );
}

#[test]
fn fatal_file_is_reported_on_the_operator_stream_only() {
    let linter = linter_from_json(r#"{ "rules": { "long-lines": true } }"#);
    let mut reporter = reporter();

    let summary = linter
        .run_sources(
            &[
                ("broken.sol", "contract broken {"),
                ("fine.sol", "contract fine {}"),
            ],
            &mut reporter,
        )
        .unwrap();

    assert_eq!(summary.fatal_errors, 1);

    let (output, operator) = reporter.into_streams();
    let output = String::from_utf8(output).unwrap();
    let operator = String::from_utf8(operator).unwrap();

    assert!(operator.starts_with("[Fatal error] Parse error: broken.sol"));
    assert!(!output.contains("broken.sol"));
    assert!(output.contains("<file name=\"fine.sol\"></file>"));
}

#[test]
fn severity_override_shows_up_in_the_report() {
    let linter = linter_from_json(r#"{ "rules": { "long-lines": "error" } }"#);
    let mut reporter = reporter();

    let long_line = format!("contract {} {{}}", "a".repeat(100));
    linter
        .run_sources(&[("a.sol", long_line.as_str())], &mut reporter)
        .unwrap();

    let output = String::from_utf8(reporter.into_output()).unwrap();
    assert!(output.contains("severity=\"error\""));
}

#[test]
fn filenames_and_messages_are_escaped() {
    let linter = linter_from_json(r#"{ "rules": { "long-lines": { "max": 10 } } }"#);
    let mut reporter = reporter();

    linter
        .run_sources(
            &[("we\"ird<&>'.sol", "contract abcdefghij {}")],
            &mut reporter,
        )
        .unwrap();

    let output = String::from_utf8(reporter.into_output()).unwrap();
    assert!(output.contains("<file name=\"we&quot;ird&lt;&amp;&gt;&apos;.sol\">"));
    assert!(!output.contains("we\"ird<&>'.sol"));
}

#[test]
fn run_over_real_files() {
    use std::io::Write as _;

    let dir = tempfile::tempdir().unwrap();
    let long_path = dir.path().join("Long.sol");
    let mut file = std::fs::File::create(&long_path).unwrap();
    write!(file, "contract {} {{}}", "a".repeat(100)).unwrap();

    let linter = linter_from_json(r#"{ "rules": { "long-lines": true } }"#);
    let mut reporter = reporter();
    let summary = linter
        .run(
            &[long_path.clone(), dir.path().join("Missing.sol")],
            &mut reporter,
        )
        .unwrap();

    assert_eq!(summary.files_checked, 2);
    assert_eq!(summary.files_with_findings, 1);
    assert_eq!(summary.fatal_errors, 1);

    let (output, operator) = reporter.into_streams();
    let output = String::from_utf8(output).unwrap();
    let operator = String::from_utf8(operator).unwrap();
    assert!(output.contains("line is longer than 79 characters (long-lines)"));
    assert!(operator.contains("[Fatal error] File error:"));
    assert!(operator.contains("Missing.sol"));
}

#[test]
fn internal_records_reach_the_operator_stream_verbatim() {
    // Reporter-level contract: internal records are drained ahead of the
    // file section and never serialized.
    let mut reporter = reporter();
    reporter.initialize();
    reporter
        .report(
            "a.sol",
            "",
            vec![
                Diagnostic::internal("long-lines", "tool failure: <unescaped> & raw"),
                Diagnostic::new("long-lines", "line is longer than 79 characters", 3, 0),
            ],
            false,
        )
        .unwrap();
    reporter.finalize().unwrap();

    let (output, operator) = reporter.into_streams();
    let output = String::from_utf8(output).unwrap();
    let operator = String::from_utf8(operator).unwrap();

    assert_eq!(operator, "tool failure: <unescaped> & raw\n\n");
    assert!(!output.contains("tool failure"));
}
