//! End-to-end behaviour of the recipe on Java sources
//!
//! Source text in, source text out, through parsing, resolution, the
//! eligibility decision and the text edits.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use staticfier::features::staticfier::{InstanceReferenceKind, Rejection};
use staticfier::StaticfierRecipe;

// ═══════════════════════════════════════════════════════════════════════════
// Acceptance
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_documented_example() {
    let outcome = run(fixture_documented_example());
    assert_converted(&outcome, &["foo"]);
    assert!(outcome.output.contains("    private static void foo() {\n"));
    assert!(outcome.output.contains("    private void bar() {\n"));
    assert_rejected_by(&outcome, "bar", InstanceReferenceKind::UnresolvedCall);
}

#[test]
fn test_pure_private_method_gains_static() {
    let source = fixture_class("Calc", &["private int twice(int x) { return x * 2; }"]);
    assert_eq!(
        rewrite(&source),
        fixture_class("Calc", &["private static int twice(int x) { return x * 2; }"])
    );
}

#[test]
fn test_final_position_is_taken_by_static() {
    let source = fixture_class(
        "Calc",
        &[
            "final private int a() { return 1; }",
            "private final int b() { return 2; }",
        ],
    );
    assert_eq!(
        rewrite(&source),
        fixture_class(
            "Calc",
            &[
                "static private int a() { return 1; }",
                "private static int b() { return 2; }",
            ]
        )
    );
}

#[test]
fn test_annotations_and_comments_are_kept() {
    let source = "class A {\n    @SuppressWarnings(\"unused\")\n    private /* helper */ final int f() { return 1; }\n}\n";
    let expected = "class A {\n    @SuppressWarnings(\"unused\")\n    private /* helper */ static int f() { return 1; }\n}\n";
    assert_eq!(rewrite(source), expected);
}

#[test]
fn test_realistic_class() {
    let outcome = run(fixture_inventory());
    assert_converted(&outcome, &["isValid", "normalize"]);
    assert!(outcome.output.contains("private static boolean isValid(String item)"));
    assert!(outcome.output.contains("private static String normalize(String item)"));
    assert_rejected_by(&outcome, "nextVersion", InstanceReferenceKind::InstanceField);
    assert_rejected_by(&outcome, "capacityLeft", InstanceReferenceKind::InstanceField);
    assert_rejection(&outcome, "add", Rejection::NotPrivate);
}

// ═══════════════════════════════════════════════════════════════════════════
// Recursion
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_direct_recursion_is_accepted() {
    let source = fixture_class(
        "Fib",
        &["private long fib(int n) { return n < 2 ? n : fib(n - 1) + fib(n - 2); }"],
    );
    let outcome = run(&source);
    assert_converted(&outcome, &["fib"]);
}

#[test]
fn test_recursion_through_this_is_qualified() {
    let source = fixture_class(
        "Tree",
        &["private int depth(int n) { return n == 0 ? 0 : this.depth(n - 1) + 1; }"],
    );
    assert_eq!(
        rewrite(&source),
        fixture_class(
            "Tree",
            &["private static int depth(int n) { return n == 0 ? 0 : Tree.depth(n - 1) + 1; }"]
        )
    );
}

#[test]
fn test_mutual_recursion_is_rejected() {
    let source = fixture_class(
        "Parity",
        &[
            "private boolean even(int n) { return n == 0 || odd(n - 1); }",
            "private boolean odd(int n) { return n != 0 && even(n - 1); }",
        ],
    );
    let outcome = run(&source);
    assert!(outcome.converted.is_empty());
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "even", InstanceReferenceKind::ImplicitInstanceCall);
    assert_rejected_by(&outcome, "odd", InstanceReferenceKind::ImplicitInstanceCall);
}

// ═══════════════════════════════════════════════════════════════════════════
// Rejection keeps the text byte-identical
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_instance_field_read_is_rejected() {
    assert_unchanged(&fixture_class(
        "Counter",
        &["private int count;", "private int next() { return count + 1; }"],
    ));
}

#[test]
fn test_instance_receiver_field_access_is_rejected() {
    assert_unchanged(&fixture_class(
        "Node",
        &[
            "private Node next;",
            "private int value;",
            "private int nextValue() { return next.value; }",
        ],
    ));
}

#[test]
fn test_implicit_instance_call_is_rejected() {
    assert_unchanged(&fixture_class(
        "Service",
        &[
            "int load() { return 1; }",
            "private int loadTwice() { return load() + load(); }",
        ],
    ));
}

#[test]
fn test_this_as_value_is_rejected() {
    let source = fixture_class(
        "Registry",
        &["private Object self() { return this; }"],
    );
    let outcome = run(&source);
    assert_eq!(outcome.output, source);
    assert_rejected_by(&outcome, "self", InstanceReferenceKind::ThisValue);
}

// ═══════════════════════════════════════════════════════════════════════════
// Safe targets and receivers
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_safe_field_access_targets() {
    let source = "class Point { int x; }
class Geometry {
    private int probe(int n) {
        Point p = new Point();
        return new int[n].length + p.x + new Point().x;
    }
}
";
    let outcome = run(source);
    assert_converted(&outcome, &["probe"]);
}

#[test]
fn test_static_member_receivers_are_accepted() {
    let source = fixture_class(
        "Config",
        &[
            "static final Config DEFAULT = new Config();",
            "static int counter;",
            "int size() { return 1; }",
            "private int defaultSize() { return DEFAULT.size() + Config.counter + Math.max(1, 2); }",
        ],
    );
    assert_converted(&run(&source), &["defaultSize"]);
}

#[test]
fn test_instance_typed_receivers_are_rejected() {
    let source = fixture_class(
        "Cache",
        &[
            "java.util.Map<String, String> entries;",
            "private int count() { return entries.size(); }",
            "private int viaThis() { return this.entries.size(); }",
        ],
    );
    let outcome = run(&source);
    assert!(outcome.converted.is_empty());
    assert_rejected_by(&outcome, "count", InstanceReferenceKind::InstanceField);
    assert_rejected_by(&outcome, "viaThis", InstanceReferenceKind::InstanceField);
}

#[test]
fn test_static_field_through_this_is_qualified() {
    let source = fixture_class(
        "Limits",
        &[
            "static final int MAX = 3;",
            "private int max() { return this.MAX; }",
        ],
    );
    assert_eq!(
        rewrite(&source),
        fixture_class(
            "Limits",
            &[
                "static final int MAX = 3;",
                "private static int max() { return Limits.MAX; }",
            ]
        )
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Idempotence and descriptor
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_second_pass_is_a_no_op() {
    let once = rewrite(fixture_inventory());
    let twice = run(&once);
    assert!(twice.converted.is_empty());
    assert_eq!(twice.output, once);
}

#[test]
fn test_recipe_descriptor() {
    let recipe = StaticfierRecipe::default();
    assert_eq!(recipe.display_name(), "Private Final Staticfier");
    assert_eq!(
        recipe.description(),
        "Makes any private final methods that do not use instance data into static methods."
    );
}
