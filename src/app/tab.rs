//! Dashboard tabs and the fixed user-facing strings of each tutoring flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Ask,
    StudyTips,
    Practice,
    Evaluate,
    Syllabus,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Ask,
        Tab::StudyTips,
        Tab::Practice,
        Tab::Evaluate,
        Tab::Syllabus,
    ];

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Tab> {
        Tab::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let idx = self.index();
        Tab::ALL[if idx == 0 { Tab::ALL.len() - 1 } else { idx - 1 }]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Ask => "Ask Question",
            Tab::StudyTips => "Study Tips",
            Tab::Practice => "Practice Questions",
            Tab::Evaluate => "Evaluate Answer",
            Tab::Syllabus => "Syllabus",
        }
    }

    /// Short name used for transcript file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Ask => "ask",
            Tab::StudyTips => "study_tips",
            Tab::Practice => "practice",
            Tab::Evaluate => "evaluate",
            Tab::Syllabus => "syllabus",
        }
    }

    /// Heading shown above the rendered response.
    pub fn response_title(&self) -> &'static str {
        match self {
            Tab::Ask => "AI Tutor's Response",
            Tab::StudyTips => "Study Tips",
            Tab::Practice => "Practice Questions",
            Tab::Evaluate => "Answer Evaluation",
            Tab::Syllabus => "Syllabus",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Tab::Ask => "Ask Question",
            Tab::StudyTips => "Get Study Tips",
            Tab::Practice => "Get Practice Questions",
            Tab::Evaluate => "Evaluate Answer",
            Tab::Syllabus => "Get Syllabus",
        }
    }

    pub fn loading_label(&self) -> &'static str {
        match self {
            Tab::Ask => "Asking...",
            Tab::StudyTips => "Fetching Tips...",
            Tab::Practice => "Generating Questions...",
            Tab::Evaluate => "Evaluating...",
            Tab::Syllabus => "Fetching Syllabus...",
        }
    }

    pub fn success_toast(&self) -> &'static str {
        match self {
            Tab::Ask => "Question answered successfully!",
            Tab::StudyTips => "Study tips fetched successfully!",
            Tab::Practice => "Practice questions generated successfully!",
            Tab::Evaluate => "Answer evaluated successfully!",
            Tab::Syllabus => "Syllabus fetched successfully!",
        }
    }

    /// Inline error shown in the tab after a failed request.
    pub fn error_message(&self) -> &'static str {
        match self {
            Tab::Ask => "Failed to get response. Please try again.",
            Tab::StudyTips => "Failed to get study tips. Please try again.",
            Tab::Practice => "Failed to get practice questions. Please try again.",
            Tab::Evaluate => "Failed to evaluate answer. Please try again.",
            Tab::Syllabus => "Failed to get syllabus. Please try again.",
        }
    }

    pub fn error_toast(&self) -> &'static str {
        match self {
            Tab::Ask => "Error: Failed to get response",
            Tab::StudyTips => "Error: Failed to get study tips",
            Tab::Practice => "Error: Failed to get practice questions",
            Tab::Evaluate => "Error: Failed to evaluate answer",
            Tab::Syllabus => "Error: Failed to get syllabus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(Tab::Syllabus.next(), Tab::Ask);
        assert_eq!(Tab::Ask.prev(), Tab::Syllabus);
        assert_eq!(Tab::StudyTips.next(), Tab::Practice);
    }

    #[test]
    fn index_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(9), None);
    }
}
