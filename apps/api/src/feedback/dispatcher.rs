//! Feedback Dispatch — turns one draft into a completion request and handles
//! completion API failure without letting it escape.
//!
//! Flow: resolve template → build prompt (rubric + focus + context + draft +
//! citation note) → single completion call → text, or user-safe fallback.
//!
//! The dispatcher is fail-soft by contract: it returns a `FeedbackResult` in
//! every case. Service errors are logged for operators and replaced with
//! `FALLBACK_FEEDBACK` for the user. No retry — a resubmission from the
//! front end is a brand-new, idempotent request.

use serde::Serialize;
use tracing::{error, info};

use crate::analysis::citations::CitationReport;
use crate::completion::prompts::RESPONSE_SHAPE_INSTRUCTION;
use crate::completion::{ChatMessage, CompletionRequest, CompletionService};
use crate::feedback::prompts::CITATION_NOTE_TEMPLATE;
use crate::feedback::templates::{template_for, PromptTemplate, WritingType};

/// One submission from the front end. Transient, never persisted.
#[derive(Debug, Clone)]
pub struct Draft {
    pub text: String,
    pub writing_type: WritingType,
    pub focus: Option<String>,
    pub assignment_context: Option<String>,
}

/// The dispatcher's answer for one draft. `degraded` marks the fallback path.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResult {
    pub text: String,
    pub degraded: bool,
}

/// User-safe message returned when the completions API cannot be reached.
pub const FALLBACK_FEEDBACK: &str = "Nova could not reach the writing coach \
    service just now, so no feedback is available for this submission. Your \
    draft was not lost — please try again in a moment.";

/// Requests feedback for one draft. Never returns an error: any completion
/// failure degrades to `FALLBACK_FEEDBACK` with a logged diagnostic.
pub async fn dispatch_feedback(
    completion: &dyn CompletionService,
    draft: &Draft,
    citations: &CitationReport,
) -> FeedbackResult {
    let template = template_for(draft.writing_type);
    let prompt = build_feedback_prompt(draft, template, citations);

    info!(
        "Dispatching feedback request: writing_type={:?}, citations={}",
        draft.writing_type, citations.total_citations
    );

    let request = match CompletionRequest::new(vec![
        ChatMessage::system(template.persona),
        ChatMessage::user(prompt),
    ]) {
        Ok(request) => request,
        Err(e) => {
            error!("Feedback request construction failed: {e}");
            return FeedbackResult {
                text: FALLBACK_FEEDBACK.to_string(),
                degraded: true,
            };
        }
    };

    match completion.complete(request).await {
        Ok(text) => FeedbackResult {
            text,
            degraded: false,
        },
        Err(e) => {
            error!("Feedback completion failed: {e}");
            FeedbackResult {
                text: FALLBACK_FEEDBACK.to_string(),
                degraded: true,
            }
        }
    }
}

/// Assembles the user-role message: rubric, optional focus and assignment
/// context, the draft itself, and a citation note when the scan found any.
fn build_feedback_prompt(
    draft: &Draft,
    template: &PromptTemplate,
    citations: &CitationReport,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "The student is working on a {}.\n\n",
        draft.writing_type.label()
    ));
    prompt.push_str(template.instructions);
    prompt.push_str("\n\n");
    prompt.push_str(RESPONSE_SHAPE_INSTRUCTION);

    if let Some(focus) = nonempty(draft.focus.as_deref()) {
        prompt.push_str(&format!(
            "\n\nFEEDBACK FOCUS: The student asked for feedback on: {focus}. \
            Weight your comments toward this."
        ));
    }

    if let Some(context) = nonempty(draft.assignment_context.as_deref()) {
        prompt.push_str(&format!("\n\nASSIGNMENT CONTEXT: {context}"));
    }

    prompt.push_str("\n\nSTUDENT DRAFT:\n");
    prompt.push_str(&draft.text);

    if citations.total_citations > 0 {
        prompt.push_str("\n\n");
        prompt.push_str(
            &CITATION_NOTE_TEMPLATE.replace("{count}", &citations.total_citations.to_string()),
        );
    }

    prompt
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
