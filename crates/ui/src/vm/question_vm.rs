use quiz_core::OptionChoice;
use quiz_core::TestingState;

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: String,
    pub choice: OptionChoice,
    pub text: String,
}

/// UI-ready view of the question currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub progress_label: String,
    /// CSS width of the progress bar, e.g. `"25.0%"`.
    pub progress_width: String,
    pub options: Vec<OptionVm>,
}

impl From<&TestingState> for QuestionVm {
    fn from(state: &TestingState) -> Self {
        let question = state.current_question();
        let (position, total) = state.progress();
        let options = OptionChoice::ALL
            .iter()
            .map(|choice| {
                let option = question.option(*choice);
                OptionVm {
                    // Keyed per question so buttons do not keep focus across questions.
                    key: format!("{}-{}", question.id(), choice.index()),
                    choice: *choice,
                    text: option.text().to_string(),
                }
            })
            .collect();

        Self {
            prompt: question.text().to_string(),
            progress_label: format!("Question {position}/{total}"),
            progress_width: progress_width(position, total),
            options,
        }
    }
}

#[must_use]
pub fn progress_width(position: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let percent = position as f64 / total as f64 * 100.0;
    format!("{percent:.1}%")
}
