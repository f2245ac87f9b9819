use std::{collections::BTreeMap, str::Lines};

use interpreter::Interpreter;
use itertools::Itertools;
use lazy_regex::regex;
use parser::Parser;
use pretty_assertions::assert_eq;
use report::Diagnostics;
use scanner::Scanner;
use test_suite_proc_macro::generate_tests;

/// Runs every line as its own program so a script can check more than one
/// runtime error. Statements are self-contained, so this does not change
/// their meaning.
pub fn test_runtime_errors_line_by_line(
    lines: Lines<'_>,
    expected_runtime_errors: &BTreeMap<usize, String>,
    expected_output: &[String],
) {
    let mut output = Vec::new();

    let mut actual_runtime_errors = BTreeMap::new();
    for (i, line) in lines.enumerate() {
        let mut diagnostics = Diagnostics::default();
        let tokens = Scanner::new(line).scan_tokens(&mut diagnostics);
        let statements = Parser::new(&tokens, &mut diagnostics).parse();
        assert!(diagnostics.is_empty(), "Unexpected static errors: {}", diagnostics);

        if let Err(error) = Interpreter::new(&mut output).run(&statements, &mut diagnostics) {
            actual_runtime_errors.insert(i + 1, error.kind.to_string());
        }
    }

    assert_eq!(
        actual_runtime_errors, *expected_runtime_errors,
        "Actual runtime errors (left) do not match expected runtime errors (right)"
    );
    assert_eq!(
        String::from_utf8(output).unwrap().lines().collect_vec(),
        expected_output,
        "Actual output (left) does not match expected output (right)"
    );
}

pub fn tern_expect(code: &str) {
    let mut expected_static_errors = vec![];
    let mut expected_runtime_errors = BTreeMap::new();
    let mut expected_output = vec![];

    let static_error_regex = regex!(r"// (Error( at .*)?: .*)");
    // For errors reported on a different line than the annotation, like an
    // unterminated string that only surfaces at the end of the file
    let static_error_with_line_regex = regex!(r"// (\[line \d+\] Error( at .*)?: .*)");
    let runtime_error_regex = regex!(r"// runtime error: (.*)");
    let output_regex = regex!(r"// expect: (.*)");

    for (i, line) in code.lines().enumerate() {
        if let Some(cap) = runtime_error_regex.captures(line) {
            expected_runtime_errors.insert(i + 1, cap[1].to_string());
        } else if let Some(cap) = static_error_with_line_regex.captures(line) {
            expected_static_errors.push(cap[1].to_string());
        } else if let Some(cap) = static_error_regex.captures(line) {
            expected_static_errors.push(format!("[line {}] {}", i + 1, &cap[1]));
        } else if let Some(cap) = output_regex.captures(line) {
            expected_output.push(cap[1].to_string());
        }
    }

    if !expected_runtime_errors.is_empty() {
        assert!(
            expected_static_errors.is_empty(),
            "Can't have a runtime error when there are static errors."
        );
    }

    if expected_runtime_errors.len() > 1 {
        test_runtime_errors_line_by_line(code.lines(), &expected_runtime_errors, &expected_output);
        return;
    }

    let mut diagnostics = Diagnostics::default();
    let tokens = Scanner::new(code).scan_tokens(&mut diagnostics);
    let statements = Parser::new(&tokens, &mut diagnostics).parse();
    if !diagnostics.is_empty() {
        assert!(expected_output.is_empty());
        assert!(expected_runtime_errors.is_empty());
        assert_eq!(diagnostics.to_string(), expected_static_errors.join("\n"));
        return;
    }
    assert!(expected_static_errors.is_empty(), "Expected static errors but none occurred");

    let mut output = Vec::new();
    match Interpreter::new(&mut output).run(&statements, &mut diagnostics) {
        Ok(()) => {
            assert_eq!(expected_output, String::from_utf8(output).unwrap().lines().collect_vec());
            assert!(expected_runtime_errors.is_empty(), "Expected runtime error but none occurred");
        }
        Err(error) => {
            assert_eq!(expected_output, String::from_utf8(output).unwrap().lines().collect_vec());
            let actual = BTreeMap::from([(error.token.line.0, error.kind.to_string())]);
            assert_eq!(
                actual, expected_runtime_errors,
                "Actual runtime error (left) does not match expected runtime error (right)"
            );
        }
    }
}

generate_tests!();
