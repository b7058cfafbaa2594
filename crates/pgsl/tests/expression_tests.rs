//! Operators, member and index access, pointers and constructors.

mod pgsl_test;
use pgsl_test::PgslTest;

fn body(parameters: &str, statements: &str) -> String {
    format!("function main({}) {{ {} }}", parameters, statements)
}

#[test]
fn test_operators_are_interpolated() {
    let test = PgslTest::new(&body(
        "a: integer, b: integer, f: boolean",
        "let c: integer = (a + b) * -a; let d: boolean = !f && a >= b; let e: integer = a << 2u;",
    ))
    .unwrap();
    test.assert_contains("let c:i32=(a+b)*-a;let d:bool=!f&&a>=b;let e:i32=a<<2u;");
}

#[test]
fn test_matrix_dimension_mismatch() {
    let test = PgslTest::new(&body(
        "m2: Matrix22<float>, m3: Matrix33<float>",
        "let m: Matrix33<float> = m2 + m3;",
    ))
    .unwrap();
    test.assert_incident("must be the same type. Dimensions 22 and 33 don't match.");
}

#[test]
fn test_operator_type_mismatch() {
    PgslTest::new(&body("a: integer, b: float", "let c: float = a + b;"))
        .unwrap()
        .assert_incident("Types \"integer\" and \"float32\" don't match.");
    PgslTest::new(&body("a: float", "let c: float = a << 1u;"))
        .unwrap()
        .assert_incident("Operator \"<<\" can not be applied to");
    PgslTest::new(&body("a: boolean", "let c: boolean = -a;"))
        .unwrap()
        .assert_incident("Operator \"-\" can not be applied to \"boolean\".");
}

#[test]
fn test_vector_scalar_arithmetic() {
    let test = PgslTest::new(&body(
        "v: Vector3<float>, m: Matrix33<float>",
        "let a: Vector3<float> = v * 2.0; let b: Vector3<float> = m * v; let c: Vector3<boolean> = v < a;",
    ))
    .unwrap();
    test.assert_contains("let a:vec3<f32>=v*2.0;let b:vec3<f32>=m*v;let c:vec3<bool>=v<a;");
}

#[test]
fn test_swizzles() {
    let test = PgslTest::new(&body(
        "v: Vector4<float>",
        "let a: Vector2<float> = v.xy; let b: float = v.w; let c: Vector3<float> = v.rgb; var d: Vector4<float> = v; d.x = 1.0;",
    ))
    .unwrap();
    test.assert_contains("let a:vec2<f32>=v.xy;let b:f32=v.w;let c:vec3<f32>=v.rgb;var d:vec4<f32>=v;d.x=1.0;");
}

#[test]
fn test_invalid_swizzles() {
    PgslTest::new(&body("v: Vector4<float>", "let a: Vector2<float> = v.xg;"))
        .unwrap()
        .assert_incident("Invalid swizzle \"xg\" on \"Vector4<float32>\".");
    PgslTest::new(&body("v: Vector2<float>", "let a: float = v.z;"))
        .unwrap()
        .assert_incident("Invalid swizzle \"z\" on \"Vector2<float32>\".");
    PgslTest::new(&body("v: Vector4<float>", "let a: float = v.xyzwx;"))
        .unwrap()
        .assert_incident("Invalid swizzle \"xyzwx\"");
}

#[test]
fn test_struct_members() {
    let test = PgslTest::new(
        r#"
        struct Light { color: Vector3<float>, intensity: float }
        function brightness(light: Light): float {
            return light.intensity * light.color.r;
        }
    "#,
    )
    .unwrap();
    test.assert_contains("fn brightness(light:Light)->f32{return light.intensity*light.color.r;}");

    let test = PgslTest::new(
        r#"
        struct Light { color: Vector3<float>, intensity: float }
        function brightness(light: Light): float {
            return light.radius;
        }
    "#,
    )
    .unwrap();
    test.assert_incident("Struct \"Light\" has no property \"radius\".");
}

#[test]
fn test_index_access() {
    let test = PgslTest::new(&body(
        "i: unsigned",
        "var values: Array<float, 4>; values[i] = 1.0; let m: Matrix22<float> = new Matrix22<float>(1.0, 0.0, 0.0, 1.0); let column: Vector2<float> = m[1];",
    ))
    .unwrap();
    test.assert_contains(
        "var values:array<f32,4>;values[i]=1.0;let m:mat2x2<f32>=mat2x2<f32>(1.0,0.0,0.0,1.0);let column:vec2<f32>=m[1];",
    );
}

#[test]
fn test_index_rules() {
    PgslTest::new(&body("", "var values: Array<float, 4>; let a: float = values[4];"))
        .unwrap()
        .assert_incident("Index 4 is out of bounds for \"Array<float32, 4>\".");
    PgslTest::new(&body("", "var values: Array<float, 4>; let a: float = values[1.0];"))
        .unwrap()
        .assert_incident("Index must be an integer");
    PgslTest::new(&body("a: float", "let b: float = a[0];"))
        .unwrap()
        .assert_incident("Type \"float32\" can not be indexed.");
}

#[test]
fn test_pointers() {
    let test = PgslTest::new(
        r#"
        function increment(value: Pointer<integer>) {
            *value += 1;
        }
        function main() {
            var count: integer = 0;
            increment(&count);
        }
    "#,
    )
    .unwrap();
    test.assert_code(
        "fn increment(value:ptr<function,i32>){*value+=1;}\nfn main(){var count:i32=0;increment(&count);}",
    );

    PgslTest::new(&body("a: integer", "let p: Pointer<integer> = &a;"))
        .unwrap()
        .assert_incident("Can not take the address of an expression that is not a variable.");
    PgslTest::new(&body("", "var v: Vector2<float> = new Vector2<float>(1.0, 2.0); let p: Pointer<float> = &v.x;"))
        .unwrap()
        .assert_incident("Can not take the address of an expression that is not a variable.");
}

#[test]
fn test_pointer_to_runtime_array() {
    PgslTest::new("function count(values: Pointer<Array<float>>): unsigned { return arrayLength(values); }")
        .unwrap()
        .assert_incident("Pointer target must have a fixed footprint, found \"Array<float32>\".");
}

#[test]
fn test_address_of_read_only_variables() {
    let test = PgslTest::new(
        r#"
        struct Light {
            intensity: float,
        }

        #[GroupBinding("scene", "light")]
        uniform light: Light;

        function main() {
            let intensity: float = *(&light.intensity);
        }
    "#,
    )
    .unwrap();
    test.assert_contains("fn main(){let intensity:f32=*(&light.intensity);}");
}

#[test]
fn test_constructors() {
    let test = PgslTest::new(&body(
        "x: integer, v: Vector2<float>",
        "let a: float = new float(x); let b: Vector4<float> = new Vector4<float>(v, 0.0, 1.0); let c: Vector3<float> = new Vector3<float>(1.0); let d: Array<integer, 3> = new Array(1, 2, 3);",
    ))
    .unwrap();
    test.assert_contains(
        "let a:f32=f32(x);let b:vec4<f32>=vec4<f32>(v,0.0,1.0);let c:vec3<f32>=vec3<f32>(1.0);let d:array<i32,3>=array(1,2,3);",
    );
}

#[test]
fn test_constructor_rules() {
    PgslTest::new(&body("", "let a: Vector3<float> = new Vector3<float>(1.0, 2.0);"))
        .unwrap()
        .assert_incident("Constructor of \"Vector3<float32>\" expects 3 component(s), found 2.");
    PgslTest::new(&body("", "let a: float = new float(true, false);"))
        .unwrap()
        .assert_incident("Constructor of \"float32\" expects 1 component(s), found 2.");
    PgslTest::new(&body("", "let s: Sampler = new Sampler();"))
        .unwrap()
        .assert_incident("is not constructible.");
}

#[test]
fn test_literal_suffixes() {
    let test = PgslTest::new(&body(
        "",
        "let a: unsigned = 1u; let b: float = 2f; let c: integer = 3i; let d: float16 = 1.5h;",
    ))
    .unwrap();
    test.assert_contains("let a:u32=1u;let b:f32=2f;let c:i32=3i;let d:f16=1.5h;");
}
