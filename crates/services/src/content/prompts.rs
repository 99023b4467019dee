use serde_json::{Value, json};

use quiz_core::model::TypeCode;

pub(crate) const QUESTIONS_SYSTEM: &str = "You are a creative game designer who specializes in \
retro 8-bit educational content. Your job is to write fun personality quiz questions that help \
students discover their MBTI-based learning style.";

pub(crate) const RESULT_SYSTEM: &str = "You are an educational psychologist who interprets MBTI \
results and gives students practical study advice. You speak clearly and encouragingly, like a \
slightly playful 8-bit game master.";

pub(crate) fn questions_prompt(language: &str) -> String {
    format!(
        "Create 12 multiple-choice questions for a learning-style quiz. Each question should \
describe a short scenario a student might run into. Every question has exactly two options, and \
each option belongs to one side of a single MBTI dichotomy (E/I, S/N, T/F, J/P); tag each option \
with its letter. Provide exactly three questions for each of the four dichotomies. Keep the tone \
fun and nostalgic, like an 8-bit RPG or adventure game. Number the question ids sequentially from \
1 to 12. Write all text in {language}."
    )
}

pub(crate) fn result_prompt(type_code: TypeCode, language: &str) -> String {
    format!(
        "The user's MBTI learning type is {type_code}. Create a complete learning profile for \
this exact type: a creative, 8-bit game themed title, a detailed description of the learning \
style with its strengths and likely struggles, and a list of actionable study tips presented as \
power-ups. Write all text in {language}."
    )
}

pub(crate) fn questions_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "text": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "text": { "type": "STRING" },
                            "type": { "type": "STRING", "enum": ["E", "I", "S", "N", "T", "F", "J", "P"] }
                        },
                        "required": ["text", "type"]
                    }
                }
            },
            "required": ["id", "text", "options"]
        }
    })
}

pub(crate) fn result_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "type": {
                "type": "STRING",
                "description": "The 4-letter MBTI type, e.g. 'INTJ'."
            },
            "title": {
                "type": "STRING",
                "description": "A creative, 8-bit game themed title for the learning style."
            },
            "description": {
                "type": "STRING",
                "description": "A detailed description of the learning style, its strengths and potential struggles."
            },
            "studyTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Actionable study tips presented as 'power-ups'."
            }
        },
        "required": ["type", "title", "description", "studyTips"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_prompt_names_code_and_language() {
        let code: TypeCode = "ENFP".parse().unwrap();
        let prompt = result_prompt(code, "Korean");
        assert!(prompt.contains("ENFP"));
        assert!(prompt.contains("Korean"));
    }

    #[test]
    fn schemas_require_the_wire_fields() {
        let questions = questions_schema();
        assert_eq!(questions["items"]["required"], json!(["id", "text", "options"]));
        let result = result_schema();
        assert_eq!(
            result["required"],
            json!(["type", "title", "description", "studyTips"])
        );
    }
}
