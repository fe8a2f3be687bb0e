//! Prompt Template Registry — static persona + rubric pairs keyed by writing type.
//!
//! The registry is total: every `WritingType` has a template, and unrecognized
//! labels resolve to the default type instead of failing. Adding a writing
//! type means adding an enum variant, a match arm, and two prompt constants —
//! dispatch logic never changes.

use serde::{Deserialize, Serialize};

use crate::feedback::prompts::{
    ACADEMIC_PAPER_CRITERIA, ACADEMIC_PAPER_PERSONA, ARGUMENTATIVE_ESSAY_CRITERIA,
    ARGUMENTATIVE_ESSAY_PERSONA, CREATIVE_WRITING_CRITERIA, CREATIVE_WRITING_PERSONA,
    PERSONAL_STATEMENT_CRITERIA, PERSONAL_STATEMENT_PERSONA, RESEARCH_PROPOSAL_CRITERIA,
    RESEARCH_PROPOSAL_PERSONA, THESIS_STATEMENT_CRITERIA, THESIS_STATEMENT_PERSONA,
};

/// Supported writing types. `AcademicPaper` is the designated default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingType {
    #[default]
    AcademicPaper,
    ThesisStatement,
    ArgumentativeEssay,
    ResearchProposal,
    PersonalStatement,
    CreativeWriting,
}

impl WritingType {
    pub const ALL: [WritingType; 6] = [
        WritingType::AcademicPaper,
        WritingType::ThesisStatement,
        WritingType::ArgumentativeEssay,
        WritingType::ResearchProposal,
        WritingType::PersonalStatement,
        WritingType::CreativeWriting,
    ];

    /// Resolves a free-form label from the front end.
    /// Case- and punctuation-insensitive; anything unrecognized falls back
    /// to the default type rather than erroring.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "academicpaper" | "academicessay" | "essay" => WritingType::AcademicPaper,
            "thesisstatement" | "thesis" => WritingType::ThesisStatement,
            "argumentativeessay" | "argument" => WritingType::ArgumentativeEssay,
            "researchproposal" | "proposal" => WritingType::ResearchProposal,
            "personalstatement" | "applicationessay" => WritingType::PersonalStatement,
            "creativewriting" | "creative" => WritingType::CreativeWriting,
            _ => WritingType::default(),
        }
    }

    /// Human-readable label, as shown in the front end's selector.
    pub fn label(&self) -> &'static str {
        match self {
            WritingType::AcademicPaper => "Academic Paper",
            WritingType::ThesisStatement => "Thesis Statement",
            WritingType::ArgumentativeEssay => "Argumentative Essay",
            WritingType::ResearchProposal => "Research Proposal",
            WritingType::PersonalStatement => "Personal Statement",
            WritingType::CreativeWriting => "Creative Writing",
        }
    }
}

/// Static prompt configuration for one writing type.
#[derive(Debug)]
pub struct PromptTemplate {
    /// System-role instruction establishing tutor identity and specialization.
    pub persona: &'static str,
    /// Rubric of named evaluation criteria for this writing type.
    pub instructions: &'static str,
}

static ACADEMIC_PAPER: PromptTemplate = PromptTemplate {
    persona: ACADEMIC_PAPER_PERSONA,
    instructions: ACADEMIC_PAPER_CRITERIA,
};

static THESIS_STATEMENT: PromptTemplate = PromptTemplate {
    persona: THESIS_STATEMENT_PERSONA,
    instructions: THESIS_STATEMENT_CRITERIA,
};

static ARGUMENTATIVE_ESSAY: PromptTemplate = PromptTemplate {
    persona: ARGUMENTATIVE_ESSAY_PERSONA,
    instructions: ARGUMENTATIVE_ESSAY_CRITERIA,
};

static RESEARCH_PROPOSAL: PromptTemplate = PromptTemplate {
    persona: RESEARCH_PROPOSAL_PERSONA,
    instructions: RESEARCH_PROPOSAL_CRITERIA,
};

static PERSONAL_STATEMENT: PromptTemplate = PromptTemplate {
    persona: PERSONAL_STATEMENT_PERSONA,
    instructions: PERSONAL_STATEMENT_CRITERIA,
};

static CREATIVE_WRITING: PromptTemplate = PromptTemplate {
    persona: CREATIVE_WRITING_PERSONA,
    instructions: CREATIVE_WRITING_CRITERIA,
};

/// Returns the template for a writing type. Total — never fails.
pub fn template_for(writing_type: WritingType) -> &'static PromptTemplate {
    match writing_type {
        WritingType::AcademicPaper => &ACADEMIC_PAPER,
        WritingType::ThesisStatement => &THESIS_STATEMENT,
        WritingType::ArgumentativeEssay => &ARGUMENTATIVE_ESSAY,
        WritingType::ResearchProposal => &RESEARCH_PROPOSAL,
        WritingType::PersonalStatement => &PERSONAL_STATEMENT,
        WritingType::CreativeWriting => &CREATIVE_WRITING,
    }
}
