//! Local variables, assignments and structured control flow.

mod pgsl_test;
use pgsl_test::PgslTest;

fn body(statements: &str) -> String {
    format!("function main(x: integer) {{ {} }}", statements)
}

#[test]
fn test_local_variables() {
    let test = PgslTest::new(&body(
        "const a: float = 1.0; let b: float = a; var c: float = b; c += 2.0; var d: integer; d = x; d++;",
    ))
    .unwrap();
    test.assert_code(
        "fn main(x:i32){const a:f32=1.0;let b:f32=a;var c:f32=b;c+=2.0;var d:i32;d=x;d++;}",
    );
}

#[test]
fn test_local_initializer_rules() {
    PgslTest::new(&body("let a: float;"))
        .unwrap()
        .assert_incident("Variables with \"let\" keyword require an initializer.");
    PgslTest::new(&body("const a: integer = x;"))
        .unwrap()
        .assert_incident("Initializer of constant \"a\" must be constant.");
    PgslTest::new(&body("let a: integer = y;"))
        .unwrap()
        .assert_incident("Variable \"y\" not defined.");
}

#[test]
fn test_assignment_rules() {
    PgslTest::new(&body("let a: integer = 1; a = 2;"))
        .unwrap()
        .assert_incident("Assignment target is not assignable.");
    PgslTest::new(&body("x = 2;"))
        .unwrap()
        .assert_incident("Assignment target is not assignable.");
    PgslTest::new(&body("var a: integer = 1; a = true;"))
        .unwrap()
        .assert_incident("Value of type \"boolean\" can not be assigned to \"integer\".");
    PgslTest::new(&body("var a: float = 1.0; a++;"))
        .unwrap()
        .assert_incident("Operator \"++\" requires an integer target, found \"float32\".");
}

#[test]
fn test_if_else_chain() {
    let test = PgslTest::new(&body(
        "var y: integer = 0; if (x > 1) { y = 1; } else if (x < 0) { y = 2; } else { y = 3; }",
    ))
    .unwrap();
    test.assert_contains("if(x>1){y=1;}else if(x<0){y=2;}else {y=3;}");
}

#[test]
fn test_condition_must_be_boolean() {
    let test = PgslTest::new(&body("if (x) { }")).unwrap();
    test.assert_incident("Condition must be a boolean, found \"integer\".");
}

#[test]
fn test_switch() {
    let test = PgslTest::new(&body(
        "switch (x) { case 1, 2: { return; } default: { } }",
    ))
    .unwrap();
    test.assert_code("fn main(x:i32){switch(x){case 1,2:{return;}default:{}}}");
}

#[test]
fn test_switch_rules() {
    PgslTest::new(&body("switch (x) { case 1: { } }"))
        .unwrap()
        .assert_incident("Switch statement requires exactly one \"default\" case.");
    PgslTest::new(&body("switch (x) { case x: { } default: { } }"))
        .unwrap()
        .assert_incident("Case selector must be constant.");
    PgslTest::new(&body("switch (1.5) { default: { } }"))
        .unwrap()
        .assert_incident("Switch selector must be an integer");
}

#[test]
fn test_while_lowering() {
    let test = PgslTest::new(&body(
        "var i: integer = 0; while (i < 10) { i++; if (i == x) { break; } }",
    ))
    .unwrap();
    test.assert_contains("loop{if !(i<10){break;}i++;if(i==x){break;}}");
}

#[test]
fn test_do_while_lowering() {
    let test = PgslTest::new(&body("var i: integer = 0; do { i++; } while (i < 3);")).unwrap();
    test.assert_contains("loop{i++; continuing{break if !(i<3);}}");
}

#[test]
fn test_for_lowering() {
    let test = PgslTest::new(&body(
        "var total: integer = 0; for (var i: integer = 0; i < 4; i++) { total += i; }",
    ))
    .unwrap();
    test.assert_contains("{var i:i32=0; loop{if !(i<4){break;}total+=i; continuing{i++;}}}");
}

#[test]
fn test_for_without_parts() {
    let test = PgslTest::new(&body("for (;;) { break; }")).unwrap();
    test.assert_contains("{loop{break;}}");
}

#[test]
fn test_for_variable_is_scoped() {
    let test = PgslTest::new(&body("for (var i: integer = 0; i < 4; i++) { } i = 1;")).unwrap();
    test.assert_incident("Variable \"i\" not defined.");
}

#[test]
fn test_jump_placement() {
    PgslTest::new(&body("break;"))
        .unwrap()
        .assert_incident("\"break\" is only allowed inside a loop or switch.");
    PgslTest::new(&body("switch (x) { case 1: { continue; } default: { } }"))
        .unwrap()
        .assert_incident("\"continue\" is only allowed inside a loop.");
    PgslTest::new(&body("while (true) { switch (x) { default: { continue; } } }"))
        .unwrap()
        .assert_clean();
}

#[test]
fn test_discard() {
    let test = PgslTest::new("#[Fragment()]\nfunction main() { discard; }").unwrap();
    test.assert_code("@fragment fn main(){discard;}");
}

#[test]
fn test_block_scopes() {
    let test = PgslTest::new(&body("{ var inner: integer = 1; } inner = 2;")).unwrap();
    test.assert_incident("Variable \"inner\" not defined.");
}
