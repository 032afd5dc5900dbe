use soorj::{Engine, RuntimeError, Value};

fn eval(src: &str) -> soorj::Environment {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine.run_source(src, &env).unwrap();
    env
}

#[test]
fn numbers_support_the_four_operators_and_modulo() {
    let env = eval("ա = 1 + 2 * 3 - 4 / 2\nբ = 7 % 3");
    assert_eq!(env.get("ա"), Some(Value::Number(5.0)));
    assert_eq!(env.get("բ"), Some(Value::Number(1.0)));
}

#[test]
fn division_by_zero_is_a_runtime_error() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    let err = engine.run_source("ա = 1 / 0", &env).unwrap_err();
    match err {
        soorj::SoorjError::Runtime(inner) => {
            assert!(matches!(inner, RuntimeError::DivisionByZero(_)))
        }
        other => panic!("expected a runtime error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn string_concatenation_via_plus() {
    let env = eval("ա = \"տարիք՝ \" + բառ(25)");
    assert_eq!(env.get("ա"), Some(Value::string("տարիք՝ 25")));
}

#[test]
fn unary_minus_requires_a_number() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    assert!(engine.run_source("ա = -\"ոչ թիվ\"", &env).is_err());
}
