// src/rules.rs
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::services::chatbot::{Rule, RuleError, RuleSet, Trigger};

pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand that. Type 'help' to see what I can do.";
pub const EMPTY_REPLY: &str = "Please type a message.";

/// Built-in rule table used when no rules file is configured.
pub fn default_rules() -> RuleSet {
    let rules = vec![
        Rule::contains("hello", "Hi there!"),
        Rule::word("hi", "Hello! How can I help you today?"),
        Rule::word("hey", "Hello! How can I help you today?"),
        Rule::contains("how are you", "I'm just a bot, but I'm doing great. Thanks for asking!"),
        Rule::contains("your name", "I'm ChatBot, a simple rule-based assistant."),
        Rule::contains("help", "You can greet me, ask my name, or ask me to recommend a movie."),
        Rule::contains("movie", "Try The Shawshank Redemption (1994). It's a classic!"),
        Rule::contains("recommend", "Try The Shawshank Redemption (1994). It's a classic!"),
        Rule::contains("thank", "You're welcome!"),
        Rule::word("bye", "Goodbye! Have a great day."),
        Rule::contains("goodbye", "Goodbye! Have a great day."),
    ];

    // `default_table_is_valid` fails first if an edit above breaks validation.
    RuleSet::with_empty_reply(rules, FALLBACK_REPLY, EMPTY_REPLY).expect("built-in rule table is valid")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    fallback: String,
    #[serde(default)]
    empty_reply: Option<String>,
    rules: Vec<RuleEntry>,
}

/// One entry of the `rules` array. Exactly one trigger key must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    contains: Option<String>,
    word: Option<String>,
    exact: Option<String>,
    reply: String,
}

impl TryFrom<(usize, RuleEntry)> for Rule {
    type Error = RuleError;

    fn try_from((index, entry): (usize, RuleEntry)) -> Result<Self, Self::Error> {
        let mut triggers = [
            entry.contains.map(Trigger::Contains),
            entry.word.map(Trigger::Word),
            entry.exact.map(Trigger::Exact),
        ]
        .into_iter()
        .flatten();

        let trigger = triggers.next().ok_or(RuleError::MissingTrigger { index })?;
        if triggers.next().is_some() {
            return Err(RuleError::AmbiguousTrigger { index });
        }
        Ok(Rule::new(trigger, entry.reply))
    }
}

pub fn parse_rules(json: &str) -> anyhow::Result<RuleSet> {
    let file: RulesFile = serde_json::from_str(json).context("Failed to parse rules JSON")?;
    let rules = file
        .rules
        .into_iter()
        .enumerate()
        .map(Rule::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let empty_reply = file.empty_reply.unwrap_or_else(|| file.fallback.clone());
    let set = RuleSet::with_empty_reply(rules, file.fallback, empty_reply)?;
    Ok(set)
}

pub fn load_rules(path: &Path) -> anyhow::Result<RuleSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    parse_rules(&content).with_context(|| format!("Invalid rules file: {}", path.display()))
}
