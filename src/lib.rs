use crate::{
    error::ConvertError,
    report::junit_model::CounterScope,
    source::{source_model::parse_report, validate::validate_report},
    translate::translator::{Translation, translate_report},
};

pub mod cli;
pub mod diagnostic;
pub mod error;
pub mod report;
pub mod source;
pub mod translate;

/// Parse, validate and translate a YAML report.
///
/// `origin` names the input in error messages (usually its path).
pub fn translate_yaml(
    yaml: &str,
    origin: &str,
    scope: CounterScope,
) -> Result<Translation, ConvertError> {
    let raw = parse_report(yaml).map_err(|source| ConvertError::Parse {
        context: origin.to_string(),
        source,
    })?;
    let report = validate_report(raw)?;

    Ok(translate_report(&report, scope))
}
