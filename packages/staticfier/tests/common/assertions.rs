//! Custom assertions for staticfier tests

use pretty_assertions::assert_eq;
use staticfier::features::staticfier::{InstanceReferenceKind, Rejection};
use staticfier::pipeline::FileOutcome;
use staticfier::Decision;

use super::fixtures::run;

/// Assert that exactly `names` were converted, in order
pub fn assert_converted(outcome: &FileOutcome, names: &[&str]) {
    let converted: Vec<&str> = outcome.converted.iter().map(|c| c.method.as_str()).collect();
    assert_eq!(converted, names, "converted methods");
}

/// Assert that the pipeline leaves `source` byte-identical
pub fn assert_unchanged(source: &str) {
    let outcome = run(source);
    assert!(
        outcome.converted.is_empty(),
        "expected no conversion, got {:?}",
        outcome.converted
    );
    assert_eq!(outcome.output, source);
}

/// Decision taken for `method`
pub fn decision_for<'o>(outcome: &'o FileOutcome, method: &str) -> &'o Decision {
    &outcome
        .outcomes
        .iter()
        .find(|o| o.method == method)
        .unwrap_or_else(|| panic!("no outcome for method `{method}`"))
        .decision
}

/// Assert that `method` was rejected because of an instance reference of `kind`
pub fn assert_rejected_by(outcome: &FileOutcome, method: &str, kind: InstanceReferenceKind) {
    match decision_for(outcome, method) {
        Decision::Reject(Rejection::InstanceReference(reference)) => {
            assert_eq!(reference.kind, kind, "rejection of `{method}`: {reference}")
        }
        other => panic!("expected `{method}` rejected by {kind:?}, got {other}"),
    }
}

/// Assert that `method` was rejected with exactly `rejection`
pub fn assert_rejection(outcome: &FileOutcome, method: &str, rejection: Rejection) {
    assert_eq!(decision_for(outcome, method), &Decision::Reject(rejection));
}
