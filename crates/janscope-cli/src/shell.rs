//! Interactive `shell` command: one keyword per line, results redrawn after
//! each completed search.

use janscope_core::{CompletionOutcome, ProductSearch, SearchSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::render_results;

const QUIT: &str = ":q";

/// Reads keywords from stdin until EOF or `:q`.
///
/// The session lives for the duration of the shell; a failed search prints
/// a notice and keeps the previous results.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub(crate) async fn run_shell<S: ProductSearch>(searcher: &S) -> anyhow::Result<()> {
    let mut session = SearchSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("enter a keyword to search, {QUIT} to quit");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == QUIT {
            break;
        }
        if let Some(text) = handle_line(&mut session, searcher, line).await {
            print!("{text}");
        }
    }
    Ok(())
}

/// Runs one shell line through the session and returns what to print.
///
/// Blank lines print nothing; failures print a notice followed by the
/// results that are still on screen.
async fn handle_line<S: ProductSearch>(
    session: &mut SearchSession,
    searcher: &S,
    line: &str,
) -> Option<String> {
    match session.run(searcher, line).await? {
        CompletionOutcome::Applied => Some(render_results(session.rows())),
        CompletionOutcome::Failed => {
            let mut text = format!(
                "search for \"{}\" failed: {}\n",
                session.keyword(),
                session.last_error().unwrap_or("unknown error")
            );
            if !session.rows().is_empty() {
                text.push_str("showing previous results\n\n");
                text.push_str(&render_results(session.rows()));
            }
            Some(text)
        }
        CompletionOutcome::Stale => None,
    }
}
