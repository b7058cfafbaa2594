//! End-to-end scenarios: source text in, WGSL out.

mod pgsl_test;
use pgsl::PgslParser;
use pgsl_test::PgslTest;

#[test]
fn test_global_constant() {
    let test = PgslTest::new("const a: float = 5.0;").unwrap();
    test.assert_code("const a:f32=5.0;");
}

#[test]
fn test_inferred_vector_constructor() {
    let source = r#"
        function main() {
            let v: Vector3<float> = new Vector3(1.0,2.0,3.0);
        }
    "#;
    let test = PgslTest::new(source).unwrap();
    test.assert_code("fn main(){let v:vec3<f32>=vec3(1.0,2.0,3.0);}");
}

#[test]
fn test_matrix_product() {
    let source = r#"
        function combine(matrixOne: Matrix33<float>, matrixTwo: Matrix33<float>): Matrix33<float> {
            let m: Matrix33<float> = matrixOne * matrixTwo;
            return m;
        }
    "#;
    let test = PgslTest::new(source).unwrap();
    test.assert_code(
        "fn combine(matrixOne:mat3x3<f32>,matrixTwo:mat3x3<f32>)->mat3x3<f32>{let m:mat3x3<f32>=matrixOne*matrixTwo;return m;}",
    );
}

#[test]
fn test_vector_dimension_mismatch_suppresses_output() {
    let source = r#"
        function main(vectorTwo: Vector2<float32>, vectorThree: Vector3<float32>) {
            let sum: Vector3<float32> = vectorTwo + vectorThree;
        }
    "#;
    let test = PgslTest::new(source).unwrap();
    test.assert_incident("must be the same type");
    test.assert_incident("Dimensions 2 and 3 don't match.");
    assert_eq!(test.code(), "");
}

#[test]
fn test_nested_imports_emit_deepest_first() {
    let parser = PgslParser::new()
        .with_import("inner", "const innerValue: float = 1.0;")
        .with_import(
            "outer",
            "#IMPORT \"inner\"\nconst outerValue: float = innerValue;",
        );
    let source = "#IMPORT \"outer\"\n#IMPORT \"inner\"\nconst rootValue: float = outerValue + innerValue;";
    let test = PgslTest::with_parser(&parser, source).unwrap();
    test.assert_code(
        "const innerValue:f32=1.0;\nconst outerValue:f32=innerValue;\nconst rootValue:f32=outerValue+innerValue;",
    );
}

#[test]
fn test_unknown_import_is_an_error() {
    let parser = PgslParser::new();
    assert!(PgslTest::with_parser(&parser, "#IMPORT \"missing\"").is_err());
}

#[test]
fn test_storage_barrier_statement() {
    let test = PgslTest::new("function main() { storageBarrier(); }").unwrap();
    test.assert_code("fn main(){storageBarrier();}");
}

/// Call-site arguments are not dropped: `storageBarrier` has a single
/// header without parameters, so extra arguments fail overload resolution.
#[test]
fn test_storage_barrier_takes_no_arguments() {
    let test = PgslTest::new("function main() { storageBarrier(1); }").unwrap();
    test.assert_incident("No matching overload for function \"storageBarrier\"");
}
