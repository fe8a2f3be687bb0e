// Cross-cutting prompt fragments shared by more than one feedback mode.
// Mode-specific prompt text lives in feedback::prompts, alongside its module.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Closing directive appended to every feedback prompt.
/// Feedback always pairs advice with questions — never advice alone.
pub const RESPONSE_SHAPE_INSTRUCTION: &str = "\
    RESPONSE SHAPE: End your feedback with 2-3 concrete, actionable suggestions \
    the student can apply in their next revision, followed by 1-2 open-ended \
    guiding questions that push the student to rethink the draft for themselves. \
    Keep the whole response under 400 words. Do NOT rewrite the draft.";
