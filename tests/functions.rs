use soorj::{Engine, Value};

fn eval(src: &str) -> soorj::Environment {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine.run_source(src, &env).unwrap();
    env
}

#[test]
fn function_returns_its_value() {
    let env = eval("գործ կրկ(ն) {\n  տուր ն * 2\n}\nարդ = կրկ(7)");
    assert_eq!(env.get("արդ"), Some(Value::Number(14.0)));
}

#[test]
fn function_with_no_return_yields_null() {
    let env = eval("գործ ֆ() {\n  1 + 1\n}\nարդ = ֆ()");
    assert_eq!(env.get("արդ"), Some(Value::Null));
}

#[test]
fn return_unwinds_through_nested_blocks() {
    let env = eval(
        "գործ ֆ(ն) {\n  եթե ն > 0 {\n    մինչև այո {\n      տուր \"գտնվեց\"\n    }\n  }\n  տուր \"չգտնվեց\"\n}\nարդ = ֆ(1)",
    );
    assert_eq!(env.get("արդ"), Some(Value::string("գտնվեց")));
}

#[test]
fn wrong_arity_is_a_runtime_error() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine
        .run_source("գործ ֆ(ա, բ) {\n  տուր ա\n}", &env)
        .unwrap();
    assert!(engine.run_source("արդ = ֆ(1)", &env).is_err());
}

#[test]
fn calling_a_non_function_is_a_runtime_error() {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine.run_source("ա = 1", &env).unwrap();
    assert!(engine.run_source("արդ = ա()", &env).is_err());
}

#[test]
fn functions_resolve_free_variables_dynamically_through_the_caller() {
    // The call frame's parent is the *caller's* current environment, not the
    // environment the function was defined in.
    let env = eval(
        "ար = 1\nգործ ֆ() {\n  տուր ար\n}\nգործ փ() {\n  ար = 2\n  տուր ֆ()\n}\nարդ = փ()",
    );
    assert_eq!(env.get("արդ"), Some(Value::Number(2.0)));
}

#[test]
fn assignment_inside_a_function_falls_back_to_a_local_binding() {
    let env = eval(
        "գործ ֆ() {\n  ներքին = 1\n  տուր ներքին\n}\nարդ = ֆ()",
    );
    assert_eq!(env.get("արդ"), Some(Value::Number(1.0)));
    assert_eq!(env.get("ներքին"), None);
}
