use serde::Serialize;

use crate::config::StaticfierConfig;
use crate::errors::Result;
use crate::features::parsing::parse_java;
use crate::features::source_edit::{apply_edits, edits_for_rewrite, TextEdit};
use crate::features::staticfier::{Decision, MethodChange, MethodOutcome, StaticfierRecipe};
use crate::features::type_resolution::resolve_unit;

/// A method made static, with its modifier list before and after
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedMethod {
    pub type_name: String,
    pub method: String,
    pub line: u32,
    pub before: String,
    pub after: String,
    /// Recipe run (1-based) that converted the method
    pub pass: usize,
}

impl ConvertedMethod {
    fn from_change(change: &MethodChange, pass: usize) -> Self {
        Self {
            type_name: change.original.declaring_type.name.clone(),
            method: change.original.name.clone(),
            line: change.original.span.start_line,
            before: change.original.modifiers.render(),
            after: change.rewritten.modifiers.render(),
            pass,
        }
    }
}

/// Result of processing one source text
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: String,
    /// Rewritten text; equal to the input when nothing was converted
    pub output: String,
    /// Final decision per method
    pub outcomes: Vec<MethodOutcome>,
    pub converted: Vec<ConvertedMethod>,
    /// Edits of the last run that changed something
    pub edits: Vec<TextEdit>,
    /// Recipe runs performed
    pub passes: usize,
}

impl FileOutcome {
    pub fn is_changed(&self) -> bool {
        !self.converted.is_empty()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.decision.is_accept()).count()
    }
}

/// Run the recipe over one Java source text
///
/// Runs up to `config.max_passes` times, stopping at the first run that
/// converts nothing. A method rejected in one run and accepted in a later
/// one is reported as accepted.
///
/// # Errors
/// Parse errors (the text is left alone), and edit conflicts.
pub fn process_source(source: &str, path: &str, config: &StaticfierConfig) -> Result<FileOutcome> {
    let recipe = StaticfierRecipe::new(config.policy());

    let mut text = source.to_string();
    let mut outcomes: Vec<MethodOutcome> = Vec::new();
    let mut converted = Vec::new();
    let mut last_edits = Vec::new();
    let mut passes = 0;

    while passes < config.max_passes.max(1) {
        let unit = parse_java(&text, path)?;
        let resolved = resolve_unit(&unit)?;
        let run = recipe.run(&resolved.unit)?;
        passes += 1;

        if passes == 1 {
            outcomes = run.outcomes.clone();
        } else {
            merge_accepted(&mut outcomes, &run.outcomes);
        }
        if !run.has_changes() {
            break;
        }

        let edits: Vec<TextEdit> = run
            .changes
            .iter()
            .flat_map(|change| edits_for_rewrite(&change.original, &change.rewritten))
            .collect();
        text = apply_edits(&text, &edits)?;
        converted.extend(
            run.changes
                .iter()
                .map(|change| ConvertedMethod::from_change(change, passes)),
        );
        last_edits = edits;
    }

    if !converted.is_empty() {
        tracing::debug!(path, converted = converted.len(), passes, "source rewritten");
    }

    Ok(FileOutcome {
        path: path.to_string(),
        output: text,
        outcomes,
        converted,
        edits: last_edits,
        passes,
    })
}

/// Later runs only add acceptances
///
/// Rewrites never add or remove methods, so every run lists the same
/// methods in the same declaration order and entries pair up by position.
fn merge_accepted(outcomes: &mut [MethodOutcome], later: &[MethodOutcome]) {
    for (entry, accepted) in outcomes
        .iter_mut()
        .zip(later)
        .filter(|(_, next)| next.decision.is_accept())
    {
        if entry.type_name == accepted.type_name && entry.method == accepted.method {
            entry.decision = Decision::Accept;
        }
    }
}
