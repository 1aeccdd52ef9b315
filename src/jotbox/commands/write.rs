use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentCache;

/// Saves every cached document, reporting each failure.
pub fn run(cache: &DocumentCache) -> Result<CmdResult> {
    let report = cache.write_all();
    let total = report.written.len() + report.failures.len();
    let mut result = CmdResult::default().with_paths(
        report
            .written
            .iter()
            .map(|key| cache.root().join(key))
            .collect(),
    );

    for (key, err) in &report.failures {
        result.add_message(CmdMessage::error(format!("{} {}", key, err)));
    }
    let summary = format!(
        "wrote {} of {} documents into {}",
        report.written.len(),
        total,
        cache.root().display()
    );
    if report.is_clean() {
        result.add_message(CmdMessage::success(summary));
    } else {
        result.add_message(CmdMessage::warning(summary));
    }
    Ok(result)
}
