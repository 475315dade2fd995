//! Edge case tests
//!
//! Declarations and constructs where a careless conversion would change
//! behaviour or break compilation.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use staticfier::config::StaticfierConfig;
use staticfier::errors::StaticfierError;
use staticfier::features::parsing::parse_java;
use staticfier::features::staticfier::InstanceReferenceKind;
use staticfier::pipeline::process_source;
use staticfier::{decide, Rejection, TypeContext};

// ═══════════════════════════════════════════════════════════════════════════
// Modifiers and signatures
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_synchronized_is_rejected_by_default() {
    let source = fixture_class("Lock", &["private synchronized int next() { return 1; }"]);
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejection(&outcome, "next", Rejection::Synchronized);
}

#[test]
fn test_synchronized_allowed_by_config() {
    let source = fixture_class("Lock", &["private synchronized int next() { return 1; }"]);
    let config = StaticfierConfig::default().reject_synchronized(false);
    let outcome = run_with(&source, &config);
    assert_converted(&outcome, &["next"]);
    assert!(outcome.output.contains("private synchronized static int next()"));
}

#[test]
fn test_non_private_and_static_methods_are_skipped() {
    let source = fixture_class(
        "Mixed",
        &[
            "int packagePrivate() { return 1; }",
            "protected int prot() { return 1; }",
            "public int pub() { return 1; }",
            "private static int done() { return 1; }",
        ],
    );
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejection(&outcome, "packagePrivate", Rejection::NotPrivate);
    assert_rejection(&outcome, "prot", Rejection::NotPrivate);
    assert_rejection(&outcome, "pub", Rejection::NotPrivate);
    assert_rejection(&outcome, "done", Rejection::AlreadyStatic);
}

#[test]
fn test_class_type_parameter_blocks_conversion() {
    let source = fixture_class(
        "Box",
        &["private java.util.List<T> wrap(Object o) { return null; }"],
    )
    .replace("class Box {", "class Box<T> {");
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejection(
        &outcome,
        "wrap",
        Rejection::UsesTypeParameter {
            name: "T".to_string(),
        },
    );
}

#[test]
fn test_method_type_parameter_is_fine() {
    let source = "class Lists<E> {\n    private <T> T first(java.util.List<T> xs) { return xs.get(0); }\n}\n";
    let expected =
        "class Lists<E> {\n    private static <T> T first(java.util.List<T> xs) { return xs.get(0); }\n}\n";
    assert_eq!(rewrite(source), expected);
}

// ═══════════════════════════════════════════════════════════════════════════
// Kinds of declaring types
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_private_interface_method() {
    let source = "interface Shape {\n    double SCALE = 2.0;\n    private double scaled(double v) { return v * SCALE; }\n}\n";
    let expected = "interface Shape {\n    double SCALE = 2.0;\n    private static double scaled(double v) { return v * SCALE; }\n}\n";
    assert_eq!(rewrite(source), expected);
}

#[test]
fn test_enum_methods() {
    let source = "enum Level {
    LOW, HIGH;

    private int weight(int base) { return base * 2; }
    private String label() { return name().toLowerCase(); }
    private boolean isHigh(Level other) { return other == HIGH; }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["weight", "isHigh"]);
    assert_rejected_by(&outcome, "label", InstanceReferenceKind::UnresolvedCall);
}

#[test]
fn test_record_components_are_instance_state() {
    let source = "record Point(int x, int y) {
    private int sum() { return x + y; }
    private int viaAccessor() { return x(); }
    private int origin() { return 0; }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["origin"]);
    assert_rejected_by(&outcome, "sum", InstanceReferenceKind::InstanceField);
    assert_rejected_by(&outcome, "viaAccessor", InstanceReferenceKind::ImplicitInstanceCall);
}

#[test]
fn test_methods_of_inner_classes() {
    let source = "class Outer {
    int count;

    class Inner {
        private int pure(int x) { return x + 1; }
        private int outerState() { return count; }
    }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["pure"]);
    assert_rejected_by(&outcome, "outerState", InstanceReferenceKind::InstanceField);
}

#[test]
fn test_qualified_this_is_rejected() {
    let source = "class Outer {
    class Inner {
        private Object outer() { return Outer.this; }
    }
}
";
    let outcome = run(source);
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "outer", InstanceReferenceKind::QualifiedThis);
}

#[test]
fn test_external_supertype_makes_names_opaque() {
    let source = fixture_class(
        "Widget",
        &[
            "private int size() { return width * 2; }",
            "private int pure(int w) { return w * 2; }",
        ],
    )
    .replace("class Widget {", "class Widget extends javax.swing.JPanel {");
    let outcome = run(&source);
    assert_converted(&outcome, &["pure"]);
    assert_rejected_by(&outcome, "size", InstanceReferenceKind::UnresolvedName);
}

#[test]
fn test_fields_inherited_within_the_unit() {
    let source = "class Base { int shared; static int COUNT; }
class Derived extends Base {
    private int own() { return shared; }
    private int total() { return COUNT + 1; }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["total"]);
    assert_rejected_by(&outcome, "own", InstanceReferenceKind::InstanceField);
}

// ═══════════════════════════════════════════════════════════════════════════
// Names and scopes
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_local_shadowing_a_field() {
    let source = fixture_class(
        "Shadow",
        &[
            "int value;",
            "private int local() { int value = 3; return value; }",
            "private int param(int value) { return value; }",
        ],
    );
    assert_converted(&run(&source), &["local", "param"]);
}

#[test]
fn test_pattern_binding_colliding_with_field_is_rejected() {
    let source = fixture_class(
        "Matcher",
        &[
            "String text;",
            "private int len(Object o) { if (o instanceof String text) { return text.length(); } return 0; }",
            "private int other(Object o) { if (o instanceof String s) { return s.length(); } return 0; }",
        ],
    );
    let outcome = run(&source);
    assert_converted(&outcome, &["other"]);
    assert_rejected_by(&outcome, "len", InstanceReferenceKind::UnresolvedName);
}

#[test]
fn test_static_imports() {
    let source = "import static java.lang.Math.PI;
import static java.lang.Math.max;

class Circle {
    private double area(double r) { return PI * r * r; }
    private int larger(int a, int b) { return max(a, b); }
}
";
    assert_converted(&run(source), &["area", "larger"]);
}

#[test]
fn test_unknown_name_is_rejected() {
    let source = fixture_class("Mystery", &["private int f() { return hidden + 1; }"]);
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "f", InstanceReferenceKind::UnresolvedName);
}

#[test]
fn test_mixed_overloads_are_unresolved() {
    let source = fixture_class(
        "Over",
        &[
            "static int pick(int x) { return x; }",
            "int pick(long x) { return 0; }",
            "private int use() { return pick(1); }",
        ],
    );
    assert_rejected_by(&run(&source), "use", InstanceReferenceKind::UnresolvedCall);
}

#[test]
fn test_static_overloads_are_fine() {
    let source = fixture_class(
        "Over",
        &[
            "static int pick(int x) { return x; }",
            "static int pick(long x) { return 0; }",
            "private int use() { return pick(1); }",
        ],
    );
    assert_converted(&run(&source), &["use"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Statements and expressions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_lambdas() {
    let source = fixture_class(
        "Tasks",
        &[
            "int counter;",
            "private Runnable pure() { return () -> System.out.println(\"tick\"); }",
            "private Runnable stateful() { return () -> counter++; }",
            "private java.util.function.IntUnaryOperator param() { return x -> x + 1; }",
        ],
    );
    let outcome = run(&source);
    assert_converted(&outcome, &["pure", "param"]);
    assert_rejected_by(&outcome, "stateful", InstanceReferenceKind::InstanceField);
}

#[test]
fn test_switch_on_enum_constants() {
    let source = "enum Color { RED, GREEN }

class Painter {
    private String name(Color c) {
        switch (c) {
            case RED:
                return \"red\";
            default:
                return \"other\";
        }
    }

    private int code(Color c) {
        return switch (c) {
            case RED -> 1;
            case GREEN -> 2;
        };
    }
}
";
    assert_converted(&run(source), &["name", "code"]);
}

#[test]
fn test_try_with_resources_and_catch() {
    let source = "import java.io.IOException;
import java.io.StringReader;

class Reader {
    private int first(String s) {
        try (StringReader r = new StringReader(s)) {
            return r.read();
        } catch (IOException e) {
            return -1;
        } finally {
            System.out.flush();
        }
    }
}
";
    assert_converted(&run(source), &["first"]);
}

#[test]
fn test_loops_and_locals() {
    let source = fixture_class(
        "Sum",
        &["private int sum(int[] xs) { int total = 0; for (int i = 0; i < xs.length; i++) { total += xs[i]; } for (int x : xs) { total += x; } return total; }"],
    );
    assert_converted(&run(&source), &["sum"]);
}

#[test]
fn test_object_creation() {
    let source = "class Outer {
    static class Nested { }
    class Inner { }

    private Nested nested() { return new Nested(); }
    private Inner inner() { return new Inner(); }
    private Runnable anonymous() { return new Runnable() { public void run() { } }; }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["nested"]);
    assert_rejected_by(&outcome, "inner", InstanceReferenceKind::InnerClassCreation);
    assert_rejected_by(&outcome, "anonymous", InstanceReferenceKind::AnonymousClass);
}

#[test]
fn test_local_class_is_rejected() {
    let source = "class Host {
    private int count() {
        class Counter { int n; }
        return new Counter().n;
    }
}
";
    let outcome = run(source);
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "count", InstanceReferenceKind::LocalClass);
}

#[test]
fn test_super_is_rejected() {
    let source = fixture_class(
        "Child",
        &[
            "private String parent() { return super.toString(); }",
            "private java.util.function.Supplier<String> ref() { return super::toString; }",
        ],
    );
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "parent", InstanceReferenceKind::SuperReference);
    assert_rejected_by(&outcome, "ref", InstanceReferenceKind::SelfMethodReference);
}

#[test]
fn test_several_this_receivers_are_all_qualified() {
    let source = fixture_class(
        "Math2",
        &[
            "static int ONE = 1;",
            "private int f(int n) { return n <= 0 ? this.ONE : this.f(n - 1) + this.ONE; }",
        ],
    );
    let expected = fixture_class(
        "Math2",
        &[
            "static int ONE = 1;",
            "private static int f(int n) { return n <= 0 ? Math2.ONE : Math2.f(n - 1) + Math2.ONE; }",
        ],
    );
    assert_eq!(rewrite(&source), expected);
}

#[test]
fn test_deeply_nested_expression_is_rejected_not_fatal() {
    let chain = vec!["\"a\""; 3000].join(" + ");
    let deep = format!("private String banner() {{ return {chain}; }}");
    let source = fixture_class("Banner", &[&deep, "private int one() { return 1; }"]);
    let outcome = run(&source);
    assert_converted(&outcome, &["one"]);
    assert_rejected_by(&outcome, "banner", InstanceReferenceKind::UnsupportedSyntax);
}

// ═══════════════════════════════════════════════════════════════════════════
// Failures
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_syntax_error_is_reported() {
    let result = process_source(
        "class Broken { private int f( { return 1; } }",
        "Broken.java",
        &StaticfierConfig::default(),
    );
    match result {
        Err(StaticfierError::Parse { path, .. }) => assert_eq!(path, "Broken.java"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_unresolved_declaration_fails_fast() {
    let unit = parse_java("class A { private int f() { return 1; } }", "A.java").unwrap();
    let method = &unit.types[0].methods[0];
    let ctx = TypeContext::new(method.declaring_type.clone());
    assert!(matches!(
        decide(method, &ctx),
        Err(StaticfierError::UnresolvedDeclaration { .. })
    ));
}

#[test]
fn test_empty_unit() {
    let outcome = run("package empty;\n");
    assert!(outcome.outcomes.is_empty());
    assert!(!outcome.is_changed());
    assert_eq!(outcome.passes, 1);
}
