// src/services/chatbot.rs
use thiserror::Error;

/// A single user utterance, as received.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    text: String,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Trimmed and case-folded form used for matching.
    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Index of the rule that produced the reply.
    Matched(usize),
    Empty,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub kind: ReplyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Normalized input contains the text anywhere.
    Contains(String),
    /// Normalized input contains the text with no letter or digit on either side.
    Word(String),
    /// Normalized input equals the text.
    Exact(String),
}

impl Trigger {
    fn pattern(&self) -> &str {
        match self {
            Trigger::Contains(p) | Trigger::Word(p) | Trigger::Exact(p) => p,
        }
    }

    fn normalized(self) -> Self {
        match self {
            Trigger::Contains(p) => Trigger::Contains(normalize(&p)),
            Trigger::Word(p) => Trigger::Word(normalize(&p)),
            Trigger::Exact(p) => Trigger::Exact(normalize(&p)),
        }
    }

    /// `input` must already be normalized.
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Trigger::Contains(p) => input.contains(p.as_str()),
            Trigger::Exact(p) => input == p,
            Trigger::Word(p) => input.match_indices(p.as_str()).any(|(start, _)| {
                let end = start + p.len();
                let before = input[..start].chars().next_back();
                let after = input[end..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub trigger: Trigger,
    pub reply: String,
}

impl Rule {
    pub fn new(trigger: Trigger, reply: impl Into<String>) -> Self {
        Self { trigger, reply: reply.into() }
    }

    pub fn contains(pattern: impl Into<String>, reply: impl Into<String>) -> Self {
        Self::new(Trigger::Contains(pattern.into()), reply)
    }

    pub fn word(pattern: impl Into<String>, reply: impl Into<String>) -> Self {
        Self::new(Trigger::Word(pattern.into()), reply)
    }

    pub fn exact(pattern: impl Into<String>, reply: impl Into<String>) -> Self {
        Self::new(Trigger::Exact(pattern.into()), reply)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule {index} has an empty trigger")]
    EmptyTrigger { index: usize },

    #[error("rule {index} has an empty reply")]
    EmptyReply { index: usize },

    #[error("rule {index} has no trigger (expected one of `contains`, `word`, `exact`)")]
    MissingTrigger { index: usize },

    #[error("rule {index} has more than one trigger")]
    AmbiguousTrigger { index: usize },

    #[error("fallback reply cannot be empty")]
    EmptyFallback,

    #[error("empty-input reply cannot be empty")]
    BlankEmptyReply,
}

/// Ordered rule table. First matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: String,
    empty_reply: String,
}

impl RuleSet {
    /// Builds a rule table whose empty-input reply is the fallback.
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Result<Self, RuleError> {
        let fallback = fallback.into();
        Self::with_empty_reply(rules, fallback.clone(), fallback)
    }

    pub fn with_empty_reply(
        rules: Vec<Rule>,
        fallback: impl Into<String>,
        empty_reply: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(RuleError::EmptyFallback);
        }

        let mut normalized = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let trigger = rule.trigger.normalized();
            if trigger.pattern().is_empty() {
                return Err(RuleError::EmptyTrigger { index });
            }
            if rule.reply.trim().is_empty() {
                return Err(RuleError::EmptyReply { index });
            }
            normalized.push(Rule { trigger, reply: rule.reply });
        }

        let empty_reply = empty_reply.into();
        if empty_reply.trim().is_empty() {
            return Err(RuleError::BlankEmptyReply);
        }

        Ok(Self { rules: normalized, fallback, empty_reply })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn empty_reply(&self) -> &str {
        &self.empty_reply
    }

    pub fn respond(&self, message: &ChatMessage) -> ChatReply {
        let input = message.normalized();

        if input.is_empty() {
            return ChatReply { text: self.empty_reply.clone(), kind: ReplyKind::Empty };
        }

        match self.rules.iter().position(|rule| rule.trigger.matches(&input)) {
            Some(index) => ChatReply {
                text: self.rules[index].reply.clone(),
                kind: ReplyKind::Matched(index),
            },
            None => ChatReply { text: self.fallback.clone(), kind: ReplyKind::Fallback },
        }
    }

    pub fn reply_to(&self, text: &str) -> ChatReply {
        self.respond(&ChatMessage::new(text))
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
