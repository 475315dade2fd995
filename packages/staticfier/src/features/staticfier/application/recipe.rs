/*
 * Staticfier Recipe
 *
 * Runs the decider over every method of one resolved compilation unit.
 *
 * All decisions are taken against the unit as it was resolved, before any
 * rewrite. A method calling a sibling that becomes static in the same run
 * is still judged against the sibling's original instance flag, so a
 * chain of conversions can take more than one run.
 */

use serde::Serialize;

use crate::errors::Result;
use crate::features::staticfier::domain::{Decision, EligibilityPolicy, TypeContext};
use crate::features::syntax_tree::{CompilationUnit, MethodDeclaration};
use crate::features::type_resolution::SymbolTable;
use crate::shared::models::Span;

use super::eligibility::{rewrite, EligibilityDecider};

const DISPLAY_NAME: &str = "Private Final Staticfier";
const DESCRIPTION: &str =
    "Makes any private final methods that do not use instance data into static methods.";

/// Decision for one method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodOutcome {
    pub type_name: String,
    pub method: String,
    pub span: Span,
    pub decision: Decision,
}

/// A converted method before and after the rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodChange {
    pub original: MethodDeclaration,
    pub rewritten: MethodDeclaration,
}

/// Result of running the recipe over one unit
#[derive(Debug, Clone)]
pub struct RecipeRun {
    /// The unit with every accepted method rewritten
    pub unit: CompilationUnit,
    /// One entry per method, in declaration order
    pub outcomes: Vec<MethodOutcome>,
    pub changes: Vec<MethodChange>,
}

impl RecipeRun {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn converted_count(&self) -> usize {
        self.changes.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }

    pub fn accepted(&self) -> impl Iterator<Item = &MethodOutcome> {
        self.outcomes.iter().filter(|o| o.decision.is_accept())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticfierRecipe {
    decider: EligibilityDecider,
}

impl StaticfierRecipe {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self {
            decider: EligibilityDecider::new(policy),
        }
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Decide every method of `unit` and rewrite the accepted ones
    ///
    /// `unit` must already be resolved (every method carries its identity).
    pub fn run(&self, unit: &CompilationUnit) -> Result<RecipeRun> {
        let symbols = SymbolTable::build(unit);

        let mut outcomes = Vec::new();
        let mut changes = Vec::new();
        for method in unit.all_methods() {
            let ctx = TypeContext::new(method.declaring_type.clone())
                .with_type_parameters(symbols.type_parameters_in_scope(method.declaring_type.id));
            let decision = self.decider.decide(method, &ctx)?;
            if decision.is_accept() {
                changes.push(MethodChange {
                    original: method.clone(),
                    rewritten: rewrite(method, &ctx),
                });
            }
            outcomes.push(MethodOutcome {
                type_name: ctx.type_name().to_string(),
                method: method.name.clone(),
                span: method.span,
                decision,
            });
        }

        let rewritten_unit = changes.iter().fold(unit.clone(), |acc, change| {
            acc.replace_method(change.original.id, &change.rewritten)
        });

        tracing::debug!(
            path = %unit.path,
            methods = outcomes.len(),
            converted = changes.len(),
            "recipe run complete"
        );

        Ok(RecipeRun {
            unit: rewritten_unit,
            outcomes,
            changes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::parse_java;
    use crate::features::syntax_tree::ModifierKind;
    use crate::features::type_resolution::resolve_unit;

    fn run(source: &str) -> RecipeRun {
        let unit = parse_java(source, "Test.java").unwrap();
        let resolved = resolve_unit(&unit).unwrap();
        StaticfierRecipe::default().run(&resolved.unit).unwrap()
    }

    #[test]
    fn test_descriptor() {
        let recipe = StaticfierRecipe::default();
        assert_eq!(recipe.display_name(), "Private Final Staticfier");
        assert!(recipe.description().starts_with("Makes any private final methods"));
    }

    #[test]
    fn test_visits_nested_types() {
        let source = "class Outer {
            private int a() { return 1; }
            static class Nested { private int b() { return 2; } }
        }";
        let result = run(source);
        let names: Vec<_> = result
            .outcomes
            .iter()
            .map(|o| format!("{}.{}", o.type_name, o.method))
            .collect();
        assert_eq!(names, vec!["Outer.a", "Nested.b"]);
        assert_eq!(result.converted_count(), 2);
        assert!(result
            .unit
            .all_methods()
            .iter()
            .all(|m| m.has_modifier(ModifierKind::Static)));
    }

    #[test]
    fn test_rejected_methods_are_untouched() {
        let source = "class A { int n; private int get() { return n; } private int one() { return 1; } }";
        let unit = resolve_unit(&parse_java(source, "A.java").unwrap()).unwrap().unit;
        let result = StaticfierRecipe::default().run(&unit).unwrap();
        assert_eq!(result.converted_count(), 1);
        assert_eq!(result.rejected_count(), 1);
        assert_eq!(result.unit.types[0].methods[0], unit.types[0].methods[0]);
        assert_eq!(result.accepted().next().unwrap().method, "one");
    }

    #[test]
    fn test_decisions_use_original_resolution() {
        // `caller` still sees `helper` as an instance method in this run
        let source = "class A {
            private int helper() { return 1; }
            private int caller() { return helper(); }
        }";
        let first = run(source);
        assert_eq!(first.converted_count(), 1);
        assert_eq!(first.changes[0].original.name, "helper");
    }

    #[test]
    fn test_unresolved_unit_is_an_error() {
        let unit = parse_java("class A { private int f() { return 1; } }", "A.java").unwrap();
        assert!(StaticfierRecipe::default().run(&unit).is_err());
    }
}
