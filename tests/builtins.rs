use soorj::{Engine, Value};

fn eval(src: &str) -> soorj::Environment {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine.run_source(src, &env).unwrap();
    env
}

#[test]
fn number_conversion_rules() {
    let env = eval(
        "ա = թիվ(\"3.5\")\nբ = թիվ(\"ոչ թիվ\")\nգ = թիվ(այո)\nդ = թիվ(ոչ)\nե = թիվ(հեչ)",
    );
    assert_eq!(env.get("ա"), Some(Value::Number(3.5)));
    assert_eq!(env.get("բ"), Some(Value::Number(0.0)));
    assert_eq!(env.get("գ"), Some(Value::Number(1.0)));
    assert_eq!(env.get("դ"), Some(Value::Number(0.0)));
    assert_eq!(env.get("ե"), Some(Value::Number(0.0)));
}

#[test]
fn string_conversion_rules() {
    let env = eval("ա = բառ(30)\nբ = բառ(հեչ)\nգ = բառ(այո)");
    assert_eq!(env.get("ա"), Some(Value::string("30")));
    assert_eq!(env.get("բ"), Some(Value::string("")));
    assert_eq!(env.get("գ"), Some(Value::string("այո")));
}

#[test]
fn number_to_string_round_trip() {
    let env = eval("ա = թիվ(բառ(42))");
    assert_eq!(env.get("ա"), Some(Value::Number(42.0)));
}

#[test]
fn write_with_wrong_arity_builtin_errors() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    assert!(engine.run_source("ա = թիվ(1, 2)", &env).is_err());
}

#[test]
fn write_accepts_any_number_of_arguments() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    assert!(engine.run_source("գրէ()\nգրէ(1)\nգրէ(1, 2, 3)", &env).is_ok());
}
