//! `classify` command: show how URLs would be rendered.

use std::io::{self, Write};

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::ClassifyArgs;
use crate::core::OpenReason;
use crate::link::{Classifier, LinkTarget};

/// Classification of one URL, as printed by `classify --json`.
#[derive(Debug, Serialize)]
pub struct Classification<'a> {
    pub url: &'a str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<OpenReason>,
    pub target: LinkTarget,
}

impl<'a> Classification<'a> {
    pub fn new(url: &'a str, classifier: &Classifier) -> Self {
        Self {
            url,
            kind: classifier.kind(url).name(),
            reason: classifier.open_reason(url),
            target: classifier.target(url),
        }
    }
}

/// Run the classify command.
pub fn run_classify(args: &ClassifyArgs, classifier: &Classifier) -> Result<()> {
    let mut out = io::stdout().lock();
    write_classifications(&mut out, args, classifier)?;
    out.flush()?;
    Ok(())
}

fn write_classifications(
    out: &mut impl Write,
    args: &ClassifyArgs,
    classifier: &Classifier,
) -> Result<()> {
    for url in &args.urls {
        let entry = Classification::new(url, classifier);
        if args.json {
            serde_json::to_writer(&mut *out, &entry)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_line(&entry))?;
        }
    }
    Ok(())
}

/// Human-readable line: `internal  /blog/post-1 -> /post-1`
fn format_line(entry: &Classification<'_>) -> String {
    let kind = format!("{:<8}", entry.kind);
    let kind = kind.if_supports_color(Stream::Stdout, |k| k.bright_blue().bold().to_string());
    let detail = match (&entry.target, entry.reason) {
        (LinkTarget::Internal { path }, _) => format!("route {path}"),
        (LinkTarget::Plain { .. }, Some(reason)) => {
            format!("new tab ({})", reason.name())
        }
        (LinkTarget::Plain { .. }, None) => "same page".to_string(),
    };
    format!("{kind}  {} -> {detail}", entry.url)
}
