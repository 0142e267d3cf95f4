//! One-shot `search` command.

use std::path::Path;

use janscope_core::{CompletionOutcome, ProductRecord, ProductSearch, SearchSession};

use crate::render::render_results;

/// Runs a single search and prints the comparison (or raw JSON).
///
/// A failed search is reported on stderr and leaves nothing printed on
/// stdout; it does not make the command fail.
///
/// # Errors
///
/// Returns an error only if the JSON export cannot be serialized or written.
pub(crate) async fn run_search<S: ProductSearch>(
    searcher: &S,
    keyword: &str,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new();
    match session.run(searcher, keyword).await {
        None => {
            eprintln!("empty keyword; nothing to search");
            return Ok(());
        }
        Some(CompletionOutcome::Failed) => {
            eprintln!(
                "search failed: {}",
                session.last_error().unwrap_or("unknown error")
            );
            return Ok(());
        }
        Some(CompletionOutcome::Applied | CompletionOutcome::Stale) => {}
    }

    if let Some(path) = output {
        write_json(path, session.records())?;
        tracing::info!(path = %path.display(), hits = session.hit_count(), "results saved");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(session.records())?);
    } else {
        print!("{}", render_results(session.rows()));
    }
    Ok(())
}

fn write_json(path: &Path, records: &[ProductRecord]) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(records)?;
    std::fs::write(path, body)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    Ok(())
}
