//! Command line of the `certreq-status` binary.

use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;

use crate::conditions::RequestSummary;
use crate::config::Settings;
use crate::types::{OutputFormat, Result};

/// Report approval state of a CertificateRequest manifest
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CertificateRequest manifest (.yaml, .yml or .json)
    pub manifest: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl Cli {
    /// Override loaded settings with command line values and revalidate
    pub fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(path) = &self.manifest {
            settings.inspect.manifest_path = Some(path.clone());
        }

        if let Some(output) = self.output {
            settings.inspect.output = output;
        }

        settings.validate()
    }
}

/// Render a summary in the requested format
pub fn render(summary: &RequestSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summary)?)),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

/// Render a summary as indented lines
pub fn render_text(summary: &RequestSummary) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "CertificateRequest {}", summary.name);
    let _ = writeln!(out, "  approved: {}", summary.approved);
    let _ = writeln!(out, "  denied:   {}", summary.denied);
    let _ = writeln!(out, "  ready:    {}", summary.ready);

    if summary.conditions.is_empty() {
        let _ = writeln!(out, "  conditions: <none>");
        return out;
    }

    let _ = writeln!(out, "  conditions:");
    for cond in &summary.conditions {
        let reason = cond.reason.as_deref().unwrap_or("-");
        let _ = match &cond.message {
            Some(message) => writeln!(out, "    {}={} ({}): {}", cond.condition_type, cond.status, reason, message),
            None => writeln!(out, "    {}={} ({})", cond.condition_type, cond.status, reason),
        };
    }

    out
}
