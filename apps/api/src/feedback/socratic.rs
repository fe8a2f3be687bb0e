//! Socratic mode — instead of commentary, the model returns a
//! structured set of guiding questions for the student to answer themselves.
//!
//! The payload is JSON; the decode is best-effort by contract. A malformed or
//! incomplete payload yields the fixed fallback guide — the fallback is a
//! first-class branch, not an exception path, and a parse problem is never
//! visible to the user beyond reduced specificity.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::completion::prompts::JSON_ONLY_SYSTEM;
use crate::completion::{ChatMessage, CompletionRequest, CompletionService};
use crate::feedback::dispatcher::Draft;
use crate::feedback::prompts::{SOCRATIC_PERSONA, SOCRATIC_PROMPT_TEMPLATE};

/// One guiding question and what it is meant to surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocraticQuestion {
    pub question: String,
    pub purpose: String,
}

/// Ordered question list plus one closing reflection question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocraticGuide {
    pub questions: Vec<SocraticQuestion>,
    pub reflection: String,
}

/// The Socratic dispatcher's answer. `degraded` marks completion
/// failure; a parse fallback alone does not set it.
#[derive(Debug, Clone)]
pub struct SocraticResult {
    pub guide: SocraticGuide,
    pub degraded: bool,
}

const FALLBACK_QUESTIONS: [(&str, &str); 3] = [
    (
        "What is the main point you want a reader to take away from this draft?",
        "Clarify the central claim",
    ),
    (
        "Which sentence does the most work to support that point, and why?",
        "Locate the strongest evidence",
    ),
    (
        "What would someone who disagrees with you say, and where do you answer them?",
        "Test the argument against objections",
    ),
];

const FALLBACK_REFLECTION: &str = "If you had to cut one paragraph entirely, \
    which would it be — and what does that tell you about its role in the draft?";

/// The fixed guide used whenever a structured payload cannot be recovered.
/// Deterministic: three generic questions plus one reflection, every time.
pub fn fallback_guide() -> SocraticGuide {
    SocraticGuide {
        questions: FALLBACK_QUESTIONS
            .iter()
            .map(|(question, purpose)| SocraticQuestion {
                question: question.to_string(),
                purpose: purpose.to_string(),
            })
            .collect(),
        reflection: FALLBACK_REFLECTION.to_string(),
    }
}

/// Decodes a raw completion payload into a guide, or falls back.
///
/// Accepts fenced output even though the prompt forbids it; an empty question
/// list or blank reflection counts as malformed.
pub fn parse_guide(raw: &str) -> SocraticGuide {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<SocraticGuide>(cleaned) {
        Ok(guide) if !guide.questions.is_empty() && !guide.reflection.trim().is_empty() => guide,
        Ok(_) => {
            warn!("Socratic payload parsed but was incomplete; using fallback guide");
            fallback_guide()
        }
        Err(e) => {
            warn!("Socratic payload parse failed ({e}); using fallback guide");
            fallback_guide()
        }
    }
}

/// Requests Socratic questions for one draft. Same fail-soft contract as
/// feedback dispatch: service failure yields the fallback guide, degraded.
pub async fn dispatch_socratic(
    completion: &dyn CompletionService,
    draft: &Draft,
) -> SocraticResult {
    let system = format!("{SOCRATIC_PERSONA} {JSON_ONLY_SYSTEM}");
    let prompt = SOCRATIC_PROMPT_TEMPLATE.replace("{draft_text}", &draft.text);

    let request = match CompletionRequest::new(vec![
        ChatMessage::system(system),
        ChatMessage::user(prompt),
    ]) {
        Ok(request) => request,
        Err(e) => {
            error!("Socratic request construction failed: {e}");
            return SocraticResult {
                guide: fallback_guide(),
                degraded: true,
            };
        }
    };

    match completion.complete(request).await {
        Ok(raw) => SocraticResult {
            guide: parse_guide(&raw),
            degraded: false,
        },
        Err(e) => {
            error!("Socratic completion failed: {e}");
            SocraticResult {
                guide: fallback_guide(),
                degraded: true,
            }
        }
    }
}

/// Strips a surrounding ``` or ```json fence from model output.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionError;
    use crate::feedback::templates::WritingType;
    use async_trait::async_trait;

    const WELL_FORMED: &str = r#"{
        "questions": [
            {"question": "What claim does paragraph one make?", "purpose": "Surface the thesis"},
            {"question": "Where is your strongest evidence?", "purpose": "Weigh support"},
            {"question": "Who disagrees, and why?", "purpose": "Invite counterargument"},
            {"question": "What does your conclusion add?", "purpose": "Check the ending earns its place"}
        ],
        "reflection": "Which paragraph would you defend hardest, and why?"
    }"#;

    #[test]
    fn test_well_formed_payload_round_trips_all_questions() {
        let guide = parse_guide(WELL_FORMED);
        assert_eq!(guide.questions.len(), 4);
        assert_eq!(guide.questions[0].purpose, "Surface the thesis");
        assert_eq!(
            guide.reflection,
            "Which paragraph would you defend hardest, and why?"
        );
    }

    #[test]
    fn test_fenced_payload_still_parses() {
        let fenced = format!("```json\n{WELL_FORMED}\n```");
        let guide = parse_guide(&fenced);
        assert_eq!(guide.questions.len(), 4);
    }

    #[test]
    fn test_malformed_payload_yields_exact_fallback() {
        let guide = parse_guide("Here are some questions you could think about!");
        assert_eq!(guide, fallback_guide());
        assert_eq!(guide.questions.len(), 3);
        assert!(!guide.reflection.is_empty());
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(parse_guide("not json"), parse_guide("{truncated"));
        assert_eq!(fallback_guide(), fallback_guide());
    }

    #[test]
    fn test_empty_question_list_counts_as_malformed() {
        let guide = parse_guide(r#"{"questions": [], "reflection": "Anything?"}"#);
        assert_eq!(guide, fallback_guide());
    }

    #[test]
    fn test_blank_reflection_counts_as_malformed() {
        let guide = parse_guide(
            r#"{"questions": [{"question": "Q?", "purpose": "P"}], "reflection": "  "}"#,
        );
        assert_eq!(guide, fallback_guide());
    }

    struct CannedCompletion(&'static str);

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl CompletionService for FailingCompletion {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            Err(CompletionError::EmptyContent)
        }
    }

    fn draft() -> Draft {
        Draft {
            text: "My essay argues that cities should ban cars downtown.".to_string(),
            writing_type: WritingType::ArgumentativeEssay,
            focus: None,
            assignment_context: None,
        }
    }

    #[tokio::test]
    async fn test_dispatch_parses_structured_reply() {
        let service = CannedCompletion(WELL_FORMED);
        let result = dispatch_socratic(&service, &draft()).await;
        assert_eq!(result.guide.questions.len(), 4);
        assert!(!result.degraded);
    }

    #[tokio::test]
    async fn test_dispatch_parse_failure_is_invisible_beyond_fallback() {
        let service = CannedCompletion("Sorry, I can only answer in prose.");
        let result = dispatch_socratic(&service, &draft()).await;
        assert_eq!(result.guide, fallback_guide());
        assert!(!result.degraded);
    }

    #[tokio::test]
    async fn test_dispatch_service_failure_degrades_to_fallback() {
        let service = FailingCompletion;
        let result = dispatch_socratic(&service, &draft()).await;
        assert_eq!(result.guide, fallback_guide());
        assert!(result.degraded);
    }
}
