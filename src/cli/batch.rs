//! `batch` command: render many link requests.
//!
//! Input is either a JSON array of requests or one request per line:
//!
//! ```text
//! {"to": "/about", "class": "nav"}
//! {"href": "mailto:a@b.com", "children": "Mail"}
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::BatchArgs;
use crate::{debug, log};
use crate::link::{Classifier, LinkPrimitives, LinkRequest, render_link};

/// Run the batch command.
pub fn run_batch<P>(args: &BatchArgs, classifier: &Classifier, primitives: &P) -> Result<()>
where
    P: LinkPrimitives<Output = String>,
{
    let input = read_input(args.input.as_deref())?;
    let requests = parse_requests(&input)?;
    debug!("batch"; "rendering {} link(s)", requests.len());

    let lines = render_all(&requests, classifier, primitives)?;
    let mut out = io::stdout().lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    log!("batch"; "rendered {} link(s)", lines.len());
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse a JSON array, or JSON lines (blank lines skipped).
pub fn parse_requests(input: &str) -> Result<Vec<LinkRequest>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).context("invalid JSON array of link requests");
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("invalid link request on line {}", i + 1))
        })
        .collect()
}

/// Render every request; the first failure aborts with its 1-based index.
pub fn render_all<P>(
    requests: &[LinkRequest],
    classifier: &Classifier,
    primitives: &P,
) -> Result<Vec<String>>
where
    P: LinkPrimitives<Output = String>,
{
    requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            render_link(request, classifier, primitives)
                .with_context(|| format!("link request #{}", i + 1))
        })
        .collect()
}
