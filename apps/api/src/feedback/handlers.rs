//! Axum route handlers for the Feedback API — the front-end boundary.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::citations::{analyze_citations, CitationReport};
use crate::errors::AppError;
use crate::feedback::dispatcher::{dispatch_feedback, Draft};
use crate::feedback::socratic::{dispatch_socratic, SocraticQuestion};
use crate::feedback::templates::WritingType;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub text: String,
    /// Free-form label; unrecognized values fall back to the default type.
    #[serde(default)]
    pub writing_type: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub assignment_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub degraded: bool,
    pub writing_type: WritingType,
    pub citations: CitationReport,
}

#[derive(Debug, Serialize)]
pub struct SocraticResponse {
    pub questions: Vec<SocraticQuestion>,
    pub reflection: String,
    pub degraded: bool,
    pub citations: CitationReport,
}

#[derive(Debug, Deserialize)]
pub struct CitationAnalysisRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct WritingTypeEntry {
    pub value: WritingType,
    pub label: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/feedback
///
/// Analyzes citations, resolves the prompt template, and requests feedback.
/// Always answers 200 once validation passes — a completion failure is
/// reported in-band via `degraded`.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let draft = draft_from_request(request)?;

    let citations = analyze_citations(&draft.text);
    let result = dispatch_feedback(state.completion.as_ref(), &draft, &citations).await;

    Ok(Json(FeedbackResponse {
        feedback: result.text,
        degraded: result.degraded,
        writing_type: draft.writing_type,
        citations,
    }))
}

/// POST /api/v1/feedback/socratic
///
/// Same boundary as feedback, but returns guiding questions instead of
/// commentary. A malformed model payload is replaced by the fixed fallback
/// question set before it gets here.
pub async fn handle_socratic(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<SocraticResponse>, AppError> {
    let draft = draft_from_request(request)?;

    let citations = analyze_citations(&draft.text);
    let result = dispatch_socratic(state.completion.as_ref(), &draft).await;

    Ok(Json(SocraticResponse {
        questions: result.guide.questions,
        reflection: result.guide.reflection,
        degraded: result.degraded,
        citations,
    }))
}

/// POST /api/v1/analysis/citations
///
/// Pure citation statistics, no completion call. Empty text is legal
/// here and yields the all-zero report.
pub async fn handle_citation_report(
    Json(request): Json<CitationAnalysisRequest>,
) -> Json<CitationReport> {
    Json(analyze_citations(&request.text))
}

/// GET /api/v1/writing-types
///
/// The registry's writing types, for the front end's selector.
pub async fn handle_writing_types() -> Json<Vec<WritingTypeEntry>> {
    Json(
        WritingType::ALL
            .into_iter()
            .map(|writing_type| WritingTypeEntry {
                value: writing_type,
                label: writing_type.label(),
            })
            .collect(),
    )
}

/// Validates the submission and assembles a `Draft`.
/// Empty text is rejected here, before any completion call.
fn draft_from_request(request: FeedbackRequest) -> Result<Draft, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Draft {
        writing_type: WritingType::from_label(request.writing_type.as_deref().unwrap_or_default()),
        text: request.text,
        focus: request.focus,
        assignment_context: request.assignment_context,
    })
}
