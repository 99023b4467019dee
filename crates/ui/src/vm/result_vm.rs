use quiz_core::model::LearningStyleResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub type_code: String,
    pub title: String,
    pub description: String,
    pub tips: Vec<String>,
}

impl From<&LearningStyleResult> for ResultVm {
    fn from(result: &LearningStyleResult) -> Self {
        Self {
            type_code: result.type_code().to_string(),
            title: result.title().to_string(),
            description: result.description().to_string(),
            tips: result.tips().to_vec(),
        }
    }
}
