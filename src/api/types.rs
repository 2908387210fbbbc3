//! Wire types for the tutor API.
//!
//! Request bodies serialize to the JSON shapes the server expects. Response
//! bodies keep only the single text field each endpoint returns.

use serde::{Deserialize, Serialize};

/// Baccalaureate subject. Serialized in lowercase (`"mathematics"`), which is
/// also the form used as a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Mathematics, Subject::Physics, Subject::Chemistry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }
}

/// Practice question difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRequest {
    pub subject: Subject,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeRequest {
    pub subject: Subject,
    pub topic: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRequest {
    pub subject: Subject,
    pub question: String,
    pub student_answer: String,
}

/// A validated request for one of the tutoring endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum TutorRequest {
    Ask(QuestionRequest),
    StudyTips { subject: Subject },
    Practice(PracticeRequest),
    Evaluate(EvaluationRequest),
    Syllabus { subject: Subject },
}

impl TutorRequest {
    pub fn subject(&self) -> Subject {
        match self {
            TutorRequest::Ask(req) => req.subject,
            TutorRequest::StudyTips { subject } => *subject,
            TutorRequest::Practice(req) => req.subject,
            TutorRequest::Evaluate(req) => req.subject,
            TutorRequest::Syllabus { subject } => *subject,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct StudyTipsResponse {
    pub study_tips: String,
}

#[derive(Debug, Deserialize)]
pub struct PracticeResponse {
    pub questions: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

#[derive(Debug, Deserialize)]
pub struct SyllabusResponse {
    pub syllabus: String,
}

/// Result of a registration call that reached the server with a 2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    /// Any success status other than 201.
    UnexpectedStatus(u16),
}
