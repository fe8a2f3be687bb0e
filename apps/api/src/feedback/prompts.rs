// All prompt constants for the feedback module.
// Cross-cutting fragments (JSON-only rules, response shape) come from
// completion::prompts.

// ────────────────────────────────────────────────────────────────────────────
// Personas — system-role identity per writing type
// ────────────────────────────────────────────────────────────────────────────

pub const ACADEMIC_PAPER_PERSONA: &str = "You are Nova, an experienced academic \
    writing tutor. You help students strengthen scholarly essays and papers with \
    specific, encouraging feedback. You never write the student's paper for them.";

pub const THESIS_STATEMENT_PERSONA: &str = "You are Nova, an academic writing \
    tutor specializing in thesis statements and argument construction. You help \
    students sharpen a working thesis into a claim worth defending.";

pub const ARGUMENTATIVE_ESSAY_PERSONA: &str = "You are Nova, an academic writing \
    tutor specializing in argumentative essays, rhetoric, and persuasive \
    structure. You push students to argue fairly and land their points.";

pub const RESEARCH_PROPOSAL_PERSONA: &str = "You are Nova, an academic writing \
    tutor specializing in research proposals. You help students frame a question, \
    justify its importance, and describe a workable plan of study.";

pub const PERSONAL_STATEMENT_PERSONA: &str = "You are Nova, a writing coach \
    specializing in personal statements and application essays. You help students \
    sound like themselves while answering the prompt they were actually asked.";

pub const CREATIVE_WRITING_PERSONA: &str = "You are Nova, a writing coach \
    specializing in creative work. You read for voice, image, and movement, and \
    you respect the writer's intent before suggesting changes.";

pub const SOCRATIC_PERSONA: &str = "You are Nova, an academic writing tutor who \
    guides students by asking questions instead of giving answers.";

// ────────────────────────────────────────────────────────────────────────────
// Evaluation rubrics — named criteria per writing type
// ────────────────────────────────────────────────────────────────────────────

pub const ACADEMIC_PAPER_CRITERIA: &str = r#"Evaluate the draft against these criteria:
1. ARGUMENT CLARITY — can a reader state the paper's central claim after one pass?
2. EVIDENCE USE — are claims backed by sources, data, or reasoning rather than assertion?
3. ORGANIZATION — does each paragraph advance the argument, with clear transitions?
4. ACADEMIC TONE — is the register consistent, precise, and free of filler?"#;

pub const THESIS_STATEMENT_CRITERIA: &str = r#"Evaluate the thesis against these criteria:
1. ARGUABILITY — does it stake a claim a reasonable reader could dispute?
2. SPECIFICITY — does it commit to particular terms rather than vague gestures?
3. CLARITY — can it be understood in one reading, without backtracking?
4. SCOPE — is the claim provable within the length of the assignment?"#;

pub const ARGUMENTATIVE_ESSAY_CRITERIA: &str = r#"Evaluate the essay against these criteria:
1. CLAIM STRENGTH — is the central position stated early and held throughout?
2. COUNTERARGUMENT — are opposing views acknowledged and answered, not ignored?
3. EVIDENCE INTEGRATION — does the essay interpret its evidence instead of just quoting it?
4. LOGICAL FLOW — does each point follow from the last without leaps?"#;

pub const RESEARCH_PROPOSAL_CRITERIA: &str = r#"Evaluate the proposal against these criteria:
1. QUESTION FOCUS — is there one answerable research question, not a topic area?
2. SIGNIFICANCE — does the proposal say who cares about the answer, and why?
3. METHOD CLARITY — could another researcher follow the described approach?
4. FEASIBILITY — is the plan achievable with the stated time and resources?"#;

pub const PERSONAL_STATEMENT_CRITERIA: &str = r#"Evaluate the statement against these criteria:
1. AUTHENTICITY — does it sound like one real person, not an applicant template?
2. NARRATIVE ARC — do the episodes build toward a point rather than list events?
3. CONCRETE DETAIL — are claims about the writer shown through specifics?
4. FIT — does it answer the prompt and speak to this particular audience?"#;

pub const CREATIVE_WRITING_CRITERIA: &str = r#"Evaluate the piece against these criteria:
1. VOICE — is there a consistent, distinct sensibility behind the sentences?
2. IMAGERY — do images land concretely, or stay abstract?
3. PACING — does the piece spend its time where the story's weight is?"#;

// ────────────────────────────────────────────────────────────────────────────
// Dispatcher fragments
// ────────────────────────────────────────────────────────────────────────────

/// Appended to the feedback prompt when the analyzer finds citations.
/// Replace `{count}` before sending.
pub const CITATION_NOTE_TEMPLATE: &str = "SOURCE USE: A heuristic scan found \
    {count} in-text citation(s) in this draft. Comment on how well the sources \
    are integrated: do citations actually support the claims they sit next to, \
    and is the balance between source voice and student voice right?";

// ────────────────────────────────────────────────────────────────────────────
// Socratic variant
// ────────────────────────────────────────────────────────────────────────────

/// Socratic prompt template. Replace `{draft_text}` before sending.
pub const SOCRATIC_PROMPT_TEMPLATE: &str = r#"Read the student draft below and produce Socratic guiding questions.

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {"question": "What single claim does your essay defend?", "purpose": "Surface the central argument"}
  ],
  "reflection": "One closing question inviting the student to reread their own draft"
}

Rules:
- Produce 3 to 4 question objects, ordered from broad to specific.
- Each "purpose" states in one short phrase what the question is meant to surface.
- Ask questions only the student can answer about their own draft — never questions with factual answers.
- "reflection" is exactly ONE open-ended closing question.

STUDENT DRAFT:
{draft_text}"#;
