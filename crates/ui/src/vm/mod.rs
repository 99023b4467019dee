mod question_vm;
mod result_vm;

pub use question_vm::{OptionVm, QuestionVm, progress_width};
pub use result_vm::ResultVm;

#[cfg(test)]
mod tests {
    use quiz_core::model::{Dimension, LearningStyleResult, Question, QuestionId, QuestionOption};
    use quiz_core::{OptionChoice, QuizEvent, Screen, Session};

    use super::*;

    fn testing_session() -> Session {
        let questions = (1..=4)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Prompt {id}"),
                    vec![
                        QuestionOption::new(format!("Yes {id}"), Dimension::Extraversion),
                        QuestionOption::new(format!("No {id}"), Dimension::Introversion),
                    ],
                )
                .unwrap()
            })
            .collect();
        Session::new()
            .apply(QuizEvent::StartRequested)
            .unwrap()
            .session
            .apply(QuizEvent::QuestionsReceived(questions))
            .unwrap()
            .session
    }

    #[test]
    fn question_vm_tracks_current_question() {
        let session = testing_session()
            .apply(QuizEvent::AnswerSelected(OptionChoice::First))
            .unwrap()
            .session;
        let Screen::Testing(state) = session.screen() else {
            panic!("expected testing");
        };

        let vm = QuestionVm::from(state);
        assert_eq!(vm.prompt, "Prompt 2");
        assert_eq!(vm.progress_label, "Question 2/4");
        assert_eq!(vm.progress_width, "50.0%");
        assert_eq!(vm.options.len(), 2);
        assert_eq!(vm.options[1].text, "No 2");
        assert_eq!(vm.options[1].choice, OptionChoice::Second);
        assert_ne!(vm.options[0].key, vm.options[1].key);
    }

    #[test]
    fn result_vm_formats_code() {
        let result = LearningStyleResult::new(
            "ISFP".parse().unwrap(),
            "The Wandering Artist",
            "Learns by doing.",
            vec!["Sketch it".into(), "Build it".into()],
        )
        .unwrap();
        let vm = ResultVm::from(&result);
        assert_eq!(vm.type_code, "ISFP");
        assert_eq!(vm.tips, vec!["Sketch it".to_string(), "Build it".to_string()]);
    }
}
