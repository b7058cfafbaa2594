//! Functions, entry points and calls.

mod pgsl_test;
use pgsl::ShaderStage;
use pgsl_test::PgslTest;

#[test]
fn test_user_function_call() {
    let test = PgslTest::new(
        r#"
        function square(x: float): float {
            return x * x;
        }

        function main() {
            let y: float = square(2.0);
            square(y);
        }
    "#,
    )
    .unwrap();
    test.assert_filecheck(
        r#"
        check: fn square(x:f32)->f32{return x*x;}
        nextln: fn main(){let y:f32=square(2.0);_=square(y);}
    "#,
    );
}

#[test]
fn test_argument_checks() {
    let source = |call: &str| {
        format!(
            "function square(x: float): float {{ return x * x; }}\nfunction main() {{ {} }}",
            call
        )
    };
    PgslTest::new(&source("square(1.0, 2.0);"))
        .unwrap()
        .assert_incident("Function \"square\" expects 1 argument(s), found 2.");
    PgslTest::new(&source("square(true);"))
        .unwrap()
        .assert_incident("Argument 1 of function \"square\" must be \"float32\", found \"boolean\".");
    PgslTest::new(&source("cube(1.0);"))
        .unwrap()
        .assert_incident("Function \"cube\" not defined.");
}

#[test]
fn test_void_function_used_as_value() {
    let test = PgslTest::new(
        r#"
        function nothing() {}
        function main() {
            let a: float = nothing();
        }
    "#,
    )
    .unwrap();
    test.assert_incident("Function without a return value used as a value.");
}

#[test]
fn test_recursion_is_reported() {
    let test = PgslTest::new("function forever(): float { return forever(); }").unwrap();
    test.assert_incident("\"forever\" is used by its own declaration.");
}

#[test]
fn test_return_rules() {
    PgslTest::new("function f(): float { return true; }")
        .unwrap()
        .assert_incident("can not be returned from function \"f\"");
    PgslTest::new("function f(): float { return; }")
        .unwrap()
        .assert_incident("Function \"f\" must return a value of type \"float32\".");
    PgslTest::new("function f() { return 1.0; }")
        .unwrap()
        .assert_incident("Function \"f\" does not return a value.");
}

#[test]
fn test_compute_entry_point() {
    let test = PgslTest::new(
        r#"
        #[Compute(8, 8)]
        function main() {
            workgroupBarrier();
        }
    "#,
    )
    .unwrap();
    test.assert_code("@compute @workgroup_size(8,8) fn main(){workgroupBarrier();}");

    let entry_points = test.result().meta.entry_points();
    assert_eq!(entry_points.len(), 1);
    assert_eq!(entry_points[0].name, "main");
    assert_eq!(entry_points[0].stage, ShaderStage::Compute);
}

#[test]
fn test_vertex_and_fragment_locations() {
    let test = PgslTest::new(
        r#"
        struct VertexOut {
            #[BuiltIn("position")] position: Vector4<float>,
            #[Location("color")] color: Vector4<float>,
        }

        #[Vertex()]
        function vertexMain(#[Location("vertexPosition")] position: Vector4<float>, #[Location("color")] color: Vector4<float>): VertexOut {
            return new VertexOut(position, color);
        }

        #[Fragment()]
        function fragmentMain(#[Location("color")] color: Vector4<float>): float {
            return color.a;
        }
    "#,
    )
    .unwrap();
    test.assert_filecheck(
        r#"
        check: struct VertexOut{@builtin(position) position:vec4<f32>,@location(0) color:vec4<f32>}
        nextln: @vertex fn vertexMain(@location(1) position:vec4<f32>,@location(0) color:vec4<f32>)->VertexOut{return VertexOut(position,color);}
        nextln: @fragment fn fragmentMain(@location(0) color:vec4<f32>)->f32{return color.a;}
    "#,
    );
    assert_eq!(test.result().meta.locations(), ["color", "vertexPosition"]);
}

#[test]
fn test_attribute_checks() {
    PgslTest::new("#[Vertex()]\n#[Fragment()]\nfunction main() {}")
        .unwrap()
        .assert_incident("A function can only be one kind of entry point.");
    PgslTest::new("#[Shiny()]\nfunction main() {}")
        .unwrap()
        .assert_incident("Unknown attribute \"Shiny\".");
    PgslTest::new("function main(#[BuiltIn(\"elbow\")] value: unsigned) {}")
        .unwrap()
        .assert_incident("Unknown built-in value \"elbow\".");
}

#[test]
fn test_builtin_generic_binding() {
    let source = |call: &str| {
        format!(
            "function main(e: Vector3<float32>, low: float32, high: float32) {{ let c: Vector3<float32> = {}; }}",
            call
        )
    };
    PgslTest::new(&source("clamp(e, low, high)")).unwrap().assert_incident(
        "No matching overload for function \"clamp\" with arguments (Vector3<float32>, float32, float32).",
    );
    PgslTest::new(&source("clamp(e, e, e)"))
        .unwrap()
        .assert_contains("let c:vec3<f32>=clamp(e,e,e);");
}

#[test]
fn test_explicit_generic_call() {
    let test = PgslTest::new(
        r#"
        function main(bits: unsigned) {
            let value: float = bitcast<float>(bits);
        }
    "#,
    )
    .unwrap();
    test.assert_code("fn main(bits:u32){let value:f32=bitcast<f32>(bits);}");
}

#[test]
fn test_calling_a_value() {
    let test = PgslTest::new("const a: float = 1.0;\nfunction main() { a(); }").unwrap();
    test.assert_incident("\"a\" is not a function.");
}

#[test]
fn test_array_length_of_read_only_storage() {
    let test = PgslTest::new(
        r#"
        #[GroupBinding("data", "values")]
        storage values: Array<float>;

        function main() {
            let count: unsigned = arrayLength(&values);
        }
    "#,
    )
    .unwrap();
    test.assert_code(
        "@group(0) @binding(0) var<storage,read> values:array<f32>;\nfn main(){let count:u32=arrayLength(&values);}",
    );
}

#[test]
fn test_array_length_needs_runtime_array() {
    let test = PgslTest::new(
        r#"
        private values: Array<float, 4>;

        function main() {
            let count: unsigned = arrayLength(&values);
        }
    "#,
    )
    .unwrap();
    test.assert_incident(
        "No matching overload for function \"arrayLength\" with arguments (Pointer<Array<float32, 4>>).",
    );
}
