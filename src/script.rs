//! Operation scripts: one JSON [`OperationRequest`] per line
//!
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # build [5, 7, 9]
//! {"kind":"insert-end","value":5}
//! {"kind":"insert-end","value":9}
//! {"kind":"insert-after-key","key":5,"value":7}
//! ```

use crate::app_error::AppError;
use crate::engine::{ListEngine, OperationError, OperationRequest, Outcome};
use std::path::Path;

/// Parse a script, reporting the 1-based line of the first malformed request
pub fn parse_script(text: &str) -> Result<Vec<OperationRequest>, AppError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line.trim())
                .map_err(|source| AppError::ScriptParse { line: i + 1, source })
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<OperationRequest>, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

/// Apply each request in order, letting every animation finish before the next
///
/// Failed operations are recorded by the engine and do not stop the script.
pub fn run_script(
    engine: &mut ListEngine,
    requests: &[OperationRequest],
) -> Vec<Result<Outcome, OperationError>> {
    requests
        .iter()
        .map(|&request| {
            let result = engine.execute(request);
            engine.settle();
            result
        })
        .collect()
}
