//! Governance check modules.
//!
//! Each module implements one control. Blocking checks return
//! `Result<_, GovernanceError>` and are recorded through [`Controls::gate`].

pub mod duplicates;
mod existence;
mod non_empty;
mod single_source;
mod source_name;

use metaquery_model::{
    Advisory, Control, ControlOutcome, Controls, Field, FieldDictionary, GovernanceError,
    Selection, ValidationResult,
};
use tracing::{debug, debug_span, info, warn};

/// Run every control in order, stopping at the first blocking failure.
pub fn run_all(dictionary: &FieldDictionary, selection: &Selection) -> ValidationResult {
    let span = debug_span!(
        "validate",
        selected = selection.len(),
        dictionary = dictionary.len()
    );
    let _guard = span.enter();

    let mut run = PipelineRun {
        controls: Controls::new(),
        fields_selected: selection.field_ids().to_vec(),
        warnings: Vec::new(),
    };
    let result = match run.execute(dictionary, selection) {
        Ok(source) => ValidationResult::allowed(
            source,
            run.fields_selected,
            run.controls,
            run.warnings,
        ),
        Err(error) => ValidationResult::blocked(
            error,
            run.fields_selected,
            run.controls,
            run.warnings,
        ),
    };
    match &result.error {
        None => info!(
            source = result.source.as_deref().unwrap_or_default(),
            field_count = result.fields_selected.len(),
            warning_count = result.warnings.len(),
            "selection allowed"
        ),
        Some(error) => info!(code = error.code(), %error, "selection blocked"),
    }
    result
}

struct PipelineRun {
    controls: Controls,
    fields_selected: Vec<String>,
    warnings: Vec<Advisory>,
}

impl PipelineRun {
    fn execute(
        &mut self,
        dictionary: &FieldDictionary,
        selection: &Selection,
    ) -> Result<String, GovernanceError> {
        self.check(Control::NonEmptySelection, non_empty::check(selection))?;

        let resolved = self.check(
            Control::AllFieldsExist,
            existence::check(dictionary, selection),
        )?;

        self.check(Control::ValidSourceName, source_name::check(&resolved))?;

        let deduplicated = duplicates::deduplicate(selection.field_ids());
        for advisory in &deduplicated.advisories {
            warn!(code = advisory.code(), %advisory, "duplicate field selected");
        }
        self.controls.record(Control::NoDuplicates, ControlOutcome::Pass);
        self.warnings.extend(deduplicated.advisories);
        self.fields_selected = deduplicated.field_ids;

        let fields: Vec<&Field> = self
            .fields_selected
            .iter()
            .filter_map(|field_id| dictionary.get(field_id))
            .collect();
        self.check(Control::SingleSource, single_source::check(&fields))
    }

    fn check<T>(
        &mut self,
        control: Control,
        result: Result<T, GovernanceError>,
    ) -> Result<T, GovernanceError> {
        let result = self.controls.gate(control, result);
        match &result {
            Ok(_) => debug!(control = control.as_str(), "control passed"),
            Err(error) => debug!(
                control = control.as_str(),
                code = error.code(),
                "control failed"
            ),
        }
        result
    }
}
