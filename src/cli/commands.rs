use std::path::Path;

use log::{debug, info, warn};

use crate::cli::config::ConvertOptions;
use crate::diagnostic::logger::write_diagnostics;
use crate::error::ConvertError;
use crate::report::console::format_summary;
use crate::report::junit::render_junit_xml;
use crate::translate_yaml;

// ============================================================================
// convert command
// ============================================================================

/// Convert `source` into JUnit XML at `destination` (stdout when `None`).
///
/// Returns `false` when `options.strict` is set and diagnostics were
/// reported. The XML is written in either case; nothing is written when a
/// fatal error occurs.
pub fn cmd_convert(
    source: &Path,
    destination: Option<&Path>,
    options: &ConvertOptions,
    verbose: u8,
) -> Result<bool, ConvertError> {
    debug!("reading {}", source.display());
    let yaml = std::fs::read_to_string(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let translation = translate_yaml(&yaml, &source.display().to_string(), options.counter_scope)?;
    let document = &translation.document;
    info!(
        "translated {} suite(s), {} test case(s) from {}",
        document.suites.len(),
        document.counts.tests,
        source.display()
    );

    for diagnostic in &translation.diagnostics {
        warn!("{}", diagnostic);
    }

    let xml = render_junit_xml(document);
    match destination {
        Some(path) => {
            std::fs::write(path, &xml).map_err(|e| ConvertError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", xml),
    }

    if let Some(path) = &options.diagnostics {
        write_diagnostics(path, &translation.diagnostics)?;
        debug!(
            "wrote {} diagnostic(s) to {}",
            translation.diagnostics.len(),
            path.display()
        );
    }

    if verbose > 0 {
        eprint!("{}", format_summary(document, &translation.diagnostics));
    }

    Ok(!(options.strict && !translation.diagnostics.is_empty()))
}
