use soorj::{Engine, Value};

fn eval(src: &str) -> soorj::Environment {
    let engine = Engine::new();
    let env = engine.new_root_environment();
    engine.run_source(src, &env).unwrap();
    env
}

#[test]
fn if_else_picks_the_truthy_branch() {
    let env = eval("եթե 5 > 3 {\n  ա = \"այո\"\n} հպ {\n  ա = \"ոչ\"\n}");
    assert_eq!(env.get("ա"), Some(Value::string("այո")));
}

#[test]
fn while_loop_counts_to_three() {
    let env = eval("ի = 1\nարդ = \"\"\nմինչև ի <= 3 {\n  արդ = արդ + բառ(ի)\n  ի = ի + 1\n}");
    assert_eq!(env.get("արդ"), Some(Value::string("123")));
}

#[test]
fn bare_blocks_do_not_open_a_new_scope() {
    // The body of an `if`/`while` shares the enclosing environment: a variable
    // assigned inside is visible after the block exits.
    let env = eval("եթե այո {\n  ներս = 1\n}\nարդ = ներս");
    assert_eq!(env.get("արդ"), Some(Value::Number(1.0)));
}

#[test]
fn logical_and_or_short_circuit_and_yield_booleans() {
    let env = eval("ա = 1 կամ 2\nբ = 1 և 0");
    assert_eq!(env.get("ա"), Some(Value::Boolean(true)));
    assert_eq!(env.get("բ"), Some(Value::Boolean(false)));
}

#[test]
fn logical_not_negates_truthiness_of_any_type() {
    let env = eval("ա = չի 0\nբ = չի \"\"");
    assert_eq!(env.get("ա"), Some(Value::Boolean(true)));
    assert_eq!(env.get("բ"), Some(Value::Boolean(true)));
}

#[test]
fn comments_do_not_change_behavior() {
    let env = eval("ա = 1 # a trailing comment\n# a whole-line comment\nբ = ա + 1");
    assert_eq!(env.get("բ"), Some(Value::Number(2.0)));
}
