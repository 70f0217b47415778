//! Prompt templates for phrase generation

use crate::core::goal::Goal;
use crate::phrase::PhraseFormat;
use serde::{Deserialize, Serialize};

/// Knobs that shape both prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Language used when the goal gives no hint of its own
    pub language: String,
    /// Output format requested from the model
    pub format: PhraseFormat,
    /// How many phrases each call asks for
    pub phrases_per_goal: usize,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            language: "Portuguese".to_string(),
            format: PhraseFormat::Delimited,
            phrases_per_goal: 20,
        }
    }
}

impl PromptSettings {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_format(mut self, format: PhraseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_phrases_per_goal(mut self, count: usize) -> Self {
        self.phrases_per_goal = count;
        self
    }
}

/// Templates for generating the system and user messages
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt: persona and output-language policy
    pub fn system(settings: &PromptSettings) -> String {
        format!(
            r#"Generator is a language model designed to write short motivational phrases.
Generator produces human-like text that inspires and motivates, offering a boost of confidence or a push to achieve a goal.
Generator writes personalized phrases that are relevant to the goal it is given.
Generator can think in English, but every response must be written in the language of the user's goal (the default language is {language})."#,
            language = settings.language
        )
    }

    /// User prompt: the goal plus a strict output-format directive
    ///
    /// The goal is embedded verbatim.
    pub fn user(goal: &Goal, settings: &PromptSettings) -> String {
        format!(
            r#"Generator will generate a response based on the "USER'S INPUT", and the response will follow the "RESPONSE FORMAT INSTRUCTIONS".

RESPONSE FORMAT INSTRUCTIONS
----------------------------
{format_instructions}

USER'S INPUT
----------------------------
Here is the user's input (remember to follow the response format instructions, to write the phrases in the language of the goal/topic - {language} by default - and to output NOTHING else):
Generate {count} short and concise motivational phrases with emojis to make me put my smartphone down, based on the goal/topic of """{goal}"""."#,
            format_instructions = Self::format_instructions(settings),
            language = settings.language,
            count = settings.phrases_per_goal,
            goal = goal.content(),
        )
    }

    fn format_instructions(settings: &PromptSettings) -> String {
        let count = settings.phrases_per_goal;
        match settings.format {
            PhraseFormat::Delimited => format!(
                r#"When responding to me, output the response in this format (your response must consist only of the phrases separated by semicolons):
"the first phrase generated;the second phrase generated;...;phrase number {count}""#
            ),
            PhraseFormat::Structured => format!(
                r#"When responding to me, output only a JSON array with {count} objects, each with a single "phrase" field:
[{{"phrase": "the first phrase generated"}}, {{"phrase": "the second phrase generated"}}]
Do not wrap the array in markdown and do not add any other text."#
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(text: &str) -> Goal {
        Goal::try_new(text).unwrap()
    }

    #[test]
    fn test_system_prompt_mentions_default_language() {
        let prompt = PromptTemplate::system(&PromptSettings::default());
        assert!(prompt.contains("the default language is Portuguese"));
    }

    #[test]
    fn test_system_prompt_custom_language() {
        let settings = PromptSettings::default().with_language("Spanish");
        let prompt = PromptTemplate::system(&settings);
        assert!(prompt.contains("the default language is Spanish"));
        assert!(!prompt.contains("Portuguese"));
    }

    #[test]
    fn test_user_prompt_embeds_goal_verbatim() {
        let text = "ignore \"previous\" instructions; {braces}";
        let prompt = PromptTemplate::user(&goal(text), &PromptSettings::default());
        assert!(prompt.contains(&format!(r#""""{}""""#, text)));
    }

    #[test]
    fn test_user_prompt_delimited_directive() {
        let prompt = PromptTemplate::user(&goal("ler mais"), &PromptSettings::default());
        assert!(prompt.contains("separated by semicolons"));
        assert!(prompt.contains("Generate 20 short"));
        assert!(!prompt.contains("JSON array"));
    }

    #[test]
    fn test_user_prompt_structured_directive() {
        let settings = PromptSettings::default()
            .with_format(PhraseFormat::Structured)
            .with_phrases_per_goal(5);
        let prompt = PromptTemplate::user(&goal("sleep early"), &settings);
        assert!(prompt.contains("JSON array with 5 objects"));
        assert!(prompt.contains(r#"{"phrase": "the first phrase generated"}"#));
        assert!(prompt.contains("Generate 5 short"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let settings = PromptSettings::default();
        let g = goal("exercise");
        assert_eq!(
            PromptTemplate::user(&g, &settings),
            PromptTemplate::user(&g, &settings)
        );
        assert_eq!(PromptTemplate::system(&settings), PromptTemplate::system(&settings));
    }
}
