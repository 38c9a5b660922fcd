//! End-to-end tests for stub generation.

use rpcgen_codegen::{StubGenerator, default_target};
use rpcgen_core::{Error, GeneratorConfig};
use std::path::Path;

const CALC: &str = r#"package calc

import (
	"context"
)

// Calc is a remote calculator.
type Calc interface {
	Add(a, b int) (sum int, err error)
	Div(num, den float64) (quo float64, rem float64, err error)
	Reset() (err error)
	Stats(ctx context.Context, since int64) (hits map[string]int, err error)
}
"#;

fn config(interface: &str) -> GeneratorConfig {
    GeneratorConfig::builder()
        .source("calc/calc.go")
        .interface_name(interface)
        .format(false)
        .build()
}

fn generate(interface: &str, source: &str) -> rpcgen_core::Result<rpcgen_codegen::GeneratedStubs> {
    StubGenerator::new()?.generate(&config(interface), source)
}

fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n.as_str()).unwrap_or_else(|| panic!("missing {n}")))
        .collect()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_one_dispatcher_and_one_client_method_per_method() {
    let stubs = generate("Calc", CALC).unwrap();
    let out = &stubs.content;
    let names = ["Add", "Div", "Reset", "Stats"];

    assert_eq!(stubs.method_count(), names.len());
    assert_eq!(out.matches("func (s *CalcService) ").count(), names.len());
    assert_eq!(out.matches("func (_c *CalcClient) ").count(), names.len() + 1);

    let dispatchers: Vec<String> = names
        .iter()
        .map(|n| format!("func (s *CalcService) {n}("))
        .collect();
    let clients: Vec<String> = names
        .iter()
        .map(|n| format!("func (_c *CalcClient) {n}("))
        .collect();

    let dispatch_at = positions(out, &dispatchers);
    let client_at = positions(out, &clients);
    assert!(dispatch_at.windows(2).all(|w| w[0] < w[1]));
    assert!(client_at.windows(2).all(|w| w[0] < w[1]));
    assert!(dispatch_at.last() < client_at.first());
}

#[test]
fn test_section_order() {
    let out = generate("Calc", CALC).unwrap().content;
    let markers = [
        "package calc".to_string(),
        "import (".to_string(),
        "type CalcService struct".to_string(),
        "func RegisterCalcService(".to_string(),
        "type CalcAddRequest struct".to_string(),
        "type CalcClient struct".to_string(),
        "func (_c *CalcClient) Close() error".to_string(),
        "func (_c *CalcClient) Add(".to_string(),
    ];
    let at = positions(&out, &markers);
    assert!(at.windows(2).all(|w| w[0] < w[1]), "{at:?}");
}

#[test]
fn test_multiple_results() {
    let out = generate("Calc", CALC).unwrap().content;
    assert!(out.contains("type CalcDivResponse struct {\n\tQuo float64\n\tRem float64\n}"));
    assert!(out.contains("\tresponse.Quo, response.Rem, err = s.impl.Div(request.Num, request.Den)\n"));
    assert!(out.contains("func (_c *CalcClient) Div(num, den float64) (quo float64, rem float64, err error) {"));
    assert!(out.contains("\treturn _response.Quo, _response.Rem, err\n"));
}

#[test]
fn test_no_parameters_no_results() {
    let out = generate("Calc", CALC).unwrap().content;
    assert!(out.contains("func (_c *CalcClient) Reset() (err error) {"));
    assert!(out.contains("\t_request := &CalcResetRequest{}\n"));
    assert!(out.contains("\terr = s.impl.Reset()\n"));
}

#[test]
fn test_routing_key() {
    let out = generate("Calc", CALC).unwrap().content;
    assert!(out.contains("\terr = _c.client.Call(_c.service+\".Stats\", _request, _response)\n"));
    assert!(out.contains("\treturn &CalcClient{client, \"Calc\"}\n"));
}

#[test]
fn test_type_text_reproduced() {
    let out = generate("Calc", CALC).unwrap().content;
    assert!(out.contains("\tCtx context.Context\n\tSince int64\n"));
    assert!(out.contains("\tHits map[string]int\n"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_interface_not_found() {
    let err = generate("Calculator", CALC).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("'Calculator' not found"));
}

#[test]
fn test_missing_error_names_method_and_position() {
    let source = "package calc\n\ntype Calc interface {\n\tAdd(a, b int) (sum int, err error)\n\tNeg(a int) (r int)\n}\n";
    let err = generate("Calc", source).unwrap_err();
    match &err {
        Error::ValidationError {
            position, method, ..
        } => {
            assert_eq!(method.as_deref(), Some("Neg"));
            assert_eq!((position.line, position.column), (5, 2));
            assert_eq!(position.file, "calc/calc.go");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unnamed_field_rejected() {
    let source = "package calc\n\ntype Calc interface {\n\tAdd(int, int) (int, error)\n}\n";
    let err = generate("Calc", source).unwrap_err();
    assert!(err.is_validation_error());
    assert!(err.position().is_some());
}

#[test]
fn test_parse_error_propagates() {
    let err = generate("Calc", "package calc\n\ntype Calc interface {\n").unwrap_err();
    assert!(err.is_parse_error());
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_default_target_next_to_source() {
    let stubs = generate("Calc", CALC).unwrap();
    assert_eq!(stubs.target, Path::new("calc/calcrpc.go"));
    assert_eq!(default_target(Path::new("calc.go"), "rpc"), Path::new("calcrpc.go"));
}
