//! Verbs and nouns recognised by the forgiving parser

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The action part of an op string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Create,
    Update,
    Delete,
    Archive,
    Unarchive,
    Move,
    Reorder,
    Select,
    Set,
    Get,
    List,
    Toggle,
}

impl Verb {
    /// Canonical verbs with the aliases each accepts
    pub const ALIASES: &'static [(Verb, &'static [&'static str])] = &[
        (Verb::Create, &["create", "add", "new", "insert"]),
        (Verb::Update, &["update", "edit"]),
        (Verb::Delete, &["delete", "remove", "rm", "del"]),
        (Verb::Archive, &["archive"]),
        (Verb::Unarchive, &["unarchive", "restore"]),
        (Verb::Move, &["move", "mv"]),
        (Verb::Reorder, &["reorder", "sort"]),
        (Verb::Select, &["select", "open", "use"]),
        (Verb::Set, &["set"]),
        (Verb::Get, &["get", "show", "read"]),
        (Verb::List, &["list", "ls"]),
        (Verb::Toggle, &["toggle", "check", "tick"]),
    ];

    /// Parse a verb or one of its aliases, case-insensitively
    pub fn from_alias(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&s.as_str()))
            .map(|(verb, _)| *verb)
    }

    pub fn as_str(&self) -> &'static str {
        Self::ALIASES
            .iter()
            .find(|(verb, _)| verb == self)
            .map(|(_, aliases)| aliases[0])
            .unwrap_or_default()
    }

    /// The alias table as JSON, canonical verb to aliases
    pub fn alias_map() -> Map<String, Value> {
        Self::ALIASES
            .iter()
            .filter(|(_, aliases)| aliases.len() > 1)
            .map(|(_, aliases)| (aliases[0].to_string(), Value::from(aliases[1..].to_vec())))
            .collect()
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity part of an op string. Singular and plural spellings are the same noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Noun {
    Board,
    Column,
    Card,
    Task,
    Background,
    ArchivedBoard,
    ArchivedCard,
    Activity,
}

impl Noun {
    /// Parse a noun. Spaces and underscores count as hyphens; a trailing `s` is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "board" => Some(Self::Board),
            "column" | "col" => Some(Self::Column),
            "card" => Some(Self::Card),
            "task" | "feed" | "task-feed" => Some(Self::Task),
            "background" | "bg" => Some(Self::Background),
            "archived-board" => Some(Self::ArchivedBoard),
            "archived-card" => Some(Self::ArchivedCard),
            "activity" | "activitie" | "log" => Some(Self::Activity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Column => "column",
            Self::Card => "card",
            Self::Task => "task",
            Self::Background => "background",
            Self::ArchivedBoard => "archived-board",
            Self::ArchivedCard => "archived-card",
            Self::Activity => "activity",
        }
    }
}

impl std::fmt::Display for Noun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request: verb, noun and normalized parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OpRequest {
    pub verb: Verb,
    pub noun: Noun,
    pub params: Map<String, Value>,
    /// Actor named in the request itself, overriding the processor's
    pub actor: Option<String>,
}

impl OpRequest {
    pub fn new(verb: Verb, noun: Noun, params: Map<String, Value>) -> Self {
        Self {
            verb,
            noun,
            params,
            actor: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn op_string(&self) -> String {
        format!("{} {}", self.verb, self.noun)
    }
}
