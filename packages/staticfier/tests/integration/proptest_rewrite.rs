//! Property-based tests for the rewrite
//!
//! Classes are generated from a fixed set of method headers and bodies
//! whose eligibility is known up front, so the expected output text can be
//! built independently of the recipe.

#[path = "../common/mod.rs"]
mod common;

use common::run;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Header {
    Private,
    PrivateFinal,
    FinalPrivate,
    Public,
    PrivateStatic,
}

impl Header {
    fn source(&self) -> &'static str {
        match self {
            Header::Private => "private",
            Header::PrivateFinal => "private final",
            Header::FinalPrivate => "final private",
            Header::Public => "public",
            Header::PrivateStatic => "private static",
        }
    }

    /// Header after conversion; `None` when the method is never a candidate
    fn converted(&self) -> Option<&'static str> {
        match self {
            Header::Private | Header::PrivateFinal => Some("private static"),
            Header::FinalPrivate => Some("static private"),
            Header::Public | Header::PrivateStatic => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Body {
    Pure,
    StaticConstant,
    StaticCall,
    SelfRecursion,
    InstanceField,
    InstanceCall,
    ThisField,
}

impl Body {
    fn source(&self, i: usize) -> String {
        match self {
            Body::Pure => "return a * 2;".to_string(),
            Body::StaticConstant => "return a + LIMIT;".to_string(),
            Body::StaticCall => "return util(a);".to_string(),
            Body::SelfRecursion => format!("return a <= 0 ? 0 : this.m{i}(a - 1);"),
            Body::InstanceField => "return a + field;".to_string(),
            Body::InstanceCall => "return instanceHelper() + a;".to_string(),
            Body::ThisField => "return this.field + a;".to_string(),
        }
    }

    fn is_eligible(&self) -> bool {
        matches!(
            self,
            Body::Pure | Body::StaticConstant | Body::StaticCall | Body::SelfRecursion
        )
    }
}

fn header() -> impl Strategy<Value = Header> {
    prop_oneof![
        Just(Header::Private),
        Just(Header::PrivateFinal),
        Just(Header::FinalPrivate),
        Just(Header::Public),
        Just(Header::PrivateStatic),
    ]
}

fn body() -> impl Strategy<Value = Body> {
    prop_oneof![
        Just(Body::Pure),
        Just(Body::StaticConstant),
        Just(Body::StaticCall),
        Just(Body::SelfRecursion),
        Just(Body::InstanceField),
        Just(Body::InstanceCall),
        Just(Body::ThisField),
    ]
}

fn methods() -> impl Strategy<Value = Vec<(Header, Body)>> {
    prop::collection::vec((header(), body()), 1..8)
}

fn method_line(i: usize, header: &str, body: &str) -> String {
    format!("    {header} int m{i}(int a) {{ {body} }}\n")
}

fn class_source(lines: &[String]) -> String {
    let mut source = String::from(
        "class Gen {
    int field;
    static final int LIMIT = 10;

    static int util(int x) { return x + 1; }

    int instanceHelper() { return field; }

",
    );
    for line in lines {
        source.push_str(line);
    }
    source.push_str("}\n");
    source
}

/// (generated source, expected output, names of converted methods)
fn generated(methods: &[(Header, Body)]) -> (String, String, Vec<String>) {
    let mut input = Vec::new();
    let mut expected = Vec::new();
    let mut converted = Vec::new();
    for (i, (header, body)) in methods.iter().enumerate() {
        let text = body.source(i);
        input.push(method_line(i, header.source(), &text));
        match header.converted().filter(|_| body.is_eligible()) {
            Some(after) => {
                let text = text.replace("this.", "Gen.");
                expected.push(method_line(i, after, &text));
                converted.push(format!("m{i}"));
            }
            None => expected.push(method_line(i, header.source(), &text)),
        }
    }
    (class_source(&input), class_source(&expected), converted)
}

proptest! {
    /// Property: the output is exactly the independently built expectation
    #[test]
    fn prop_output_matches_expectation(methods in methods()) {
        let (source, expected, converted) = generated(&methods);
        let outcome = run(&source);
        prop_assert_eq!(&outcome.output, &expected);
        let names: Vec<String> = outcome.converted.iter().map(|c| c.method.clone()).collect();
        prop_assert_eq!(names, converted);
    }

    /// Property: running on the output converts nothing more
    #[test]
    fn prop_rewrite_is_idempotent(methods in methods()) {
        let (source, _, _) = generated(&methods);
        let once = run(&source);
        let twice = run(&once.output);
        prop_assert!(twice.converted.is_empty());
        prop_assert_eq!(twice.output, once.output);
    }

    /// Property: every method header carries `static` at most once, and
    /// every converted one exactly once
    #[test]
    fn prop_static_appears_once(methods in methods()) {
        let (source, _, _) = generated(&methods);
        let outcome = run(&source);
        for line in outcome.output.lines().filter(|l| l.contains(" m")) {
            let statics = line.split_whitespace().filter(|t| *t == "static").count();
            prop_assert!(statics <= 1, "duplicate static in {line}");
        }
        for method in &outcome.converted {
            let header = outcome
                .output
                .lines()
                .find(|l| l.contains(&format!(" {}(", method.method)))
                .unwrap();
            prop_assert_eq!(header.split_whitespace().filter(|t| *t == "static").count(), 1);
        }
    }

    /// Property: rejected methods keep their text byte for byte
    #[test]
    fn prop_rejected_methods_are_untouched(methods in methods()) {
        let (source, _, _) = generated(&methods);
        let outcome = run(&source);
        let converted: Vec<&str> = outcome.converted.iter().map(|c| c.method.as_str()).collect();
        for (i, line) in source.lines().enumerate() {
            let is_converted = converted.iter().any(|m| line.contains(&format!(" {m}(")));
            if !is_converted {
                prop_assert_eq!(Some(line), outcome.output.lines().nth(i));
            }
        }
    }
}
