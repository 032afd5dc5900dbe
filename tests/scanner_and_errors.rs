use soorj::{parse_source, Engine};

#[test]
fn lexical_error_on_disallowed_string_character() {
    let err = parse_source("ա = \"abc\"").unwrap_err();
    assert!(matches!(err, soorj::SoorjError::Lex(_)));
}

#[test]
fn unterminated_string_is_accepted_silently() {
    assert!(parse_source("գրէ(\"Բարեւ").is_ok());
}

#[test]
fn syntax_error_on_invalid_assignment_target() {
    let err = parse_source("1 = 2").unwrap_err();
    assert!(matches!(err, soorj::SoorjError::Parse(_)));
}

#[test]
fn syntax_error_on_invalid_call_target() {
    let err = parse_source("1()").unwrap_err();
    assert!(matches!(err, soorj::SoorjError::Parse(_)));
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    let err = engine.run_source("գրէ(չսահմանված)", &env).unwrap_err();
    assert!(matches!(err, soorj::SoorjError::Runtime(_)));
}

#[test]
fn empty_source_runs_with_no_output_and_no_error() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    assert!(engine.run_source("", &env).is_ok());
    assert!(engine.run_source("   \n# only a comment\n", &env).is_ok());
}
