//! Output formatting utilities

use crate::application::{OperationReport, StepStatus};
use crate::domain::ContentModel;

fn glyph(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Done => "✅",
        StepStatus::Info => "ℹ️",
        StepStatus::Warning => "⚠️",
        StepStatus::Failed => "❌",
    }
}

/// Format an operation report, one glyph-prefixed line per step.
pub fn format_report(report: &OperationReport) -> String {
    let mut output = String::new();
    for step in report.steps() {
        output.push_str(&format!("{} {}\n", glyph(step.status), step.message));
    }
    output
}

/// Format the tags, writeups and projects of a site for display.
pub fn format_inventory(model: &ContentModel) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tags ({}):\n", model.tag_count()));
    if model.tag_count() == 0 {
        output.push_str("  No tags found\n");
    }
    for tag in model.tags() {
        let uses = model.writeups_tagged(tag).count();
        output.push_str(&format!("  #{} ({})\n", tag, uses));
    }

    output.push_str(&format!("\nWriteups ({}):\n", model.writeups().len()));
    if model.writeups().is_empty() {
        output.push_str("  No writeups found\n");
    }
    for writeup in model.writeups() {
        output.push_str(&format!("  {}  [{}]\n", writeup.title, writeup.filename));
        if !writeup.tags.is_empty() {
            output.push_str(&format!("    tags: {}\n", writeup.tags.join(", ")));
        }
    }

    output.push_str(&format!("\nProjects ({}):\n", model.projects().len()));
    if model.projects().is_empty() {
        output.push_str("  No projects found\n");
    }
    for project in model.projects() {
        output.push_str(&format!("  {}  {}\n", project.title, project.url));
    }

    output
}
