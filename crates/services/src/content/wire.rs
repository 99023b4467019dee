//! JSON shapes returned by the generative provider and their validation.

use serde::Deserialize;

use quiz_core::model::{
    Dimension, LearningStyleResult, Question, QuestionId, QuestionOption, QuestionSet, TypeCode,
};

use crate::error::ContentError;

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionDto {
    id: u32,
    text: String,
    options: Vec<OptionDto>,
}

#[derive(Debug, Deserialize)]
struct OptionDto {
    text: String,
    #[serde(rename = "type")]
    dimension: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultDto {
    #[serde(rename = "type")]
    type_code: String,
    title: String,
    description: String,
    #[serde(rename = "studyTips", default)]
    study_tips: Vec<String>,
}

/// Parse and validate a generated question array.
pub(crate) fn parse_questions(json: &str) -> Result<QuestionSet, ContentError> {
    let dtos: Vec<QuestionDto> = serde_json::from_str(strip_code_fence(json))?;
    let questions = dtos
        .into_iter()
        .map(QuestionDto::into_question)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionSet::new(questions)?)
}

/// Parse a generated result object. The returned code is reported back so the
/// caller can compare it with the one it asked for.
pub(crate) fn parse_result(json: &str) -> Result<(TypeCode, ResultDto), ContentError> {
    let dto: ResultDto = serde_json::from_str(strip_code_fence(json))?;
    let code: TypeCode = dto.type_code.parse()?;
    Ok((code, dto))
}

impl QuestionDto {
    fn into_question(self) -> Result<Question, ContentError> {
        let options = self
            .options
            .into_iter()
            .map(|option| {
                let dimension: Dimension = option.dimension.trim().to_ascii_uppercase().parse()?;
                Ok(QuestionOption::new(option.text.trim(), dimension))
            })
            .collect::<Result<Vec<_>, ContentError>>()?;
        Ok(Question::new(QuestionId::new(self.id), self.text, options)?)
    }
}

impl ResultDto {
    pub(crate) fn into_result(self, type_code: TypeCode) -> Result<LearningStyleResult, ContentError> {
        Ok(LearningStyleResult::new(
            type_code,
            self.title,
            self.description,
            self.study_tips,
        )?)
    }
}

// Some models wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
