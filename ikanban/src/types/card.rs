//! Cards and their checklist items and links

use super::ids::{CardId, ChecklistItemId, LinkId};
use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Character limit of the description preview on the board view
pub const PREVIEW_LIMIT: usize = 100;

/// Days ahead of today within which a due date counts as due soon
pub const DUE_SOON_DAYS: i64 = 2;

/// A card on a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// Rich text, stored as given
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub archived: bool,
}

/// One checklist entry. Callers address it by position; `id` only detects stale positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// An external link attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub id: LinkId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: LinkId::new(),
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title, or the url's host name when no title is set
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => url::Url::parse(&self.url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| self.url.clone()),
        }
    }
}

/// The editable content of a card, replaced wholesale on update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl CardFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    /// Trim and validate.
    ///
    /// The title must be non-empty after trimming. Checklist items with blank
    /// text are dropped. Link urls must be http(s) with something after the
    /// scheme; blank link titles become `None`.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }

        let checklist = self
            .checklist
            .into_iter()
            .filter_map(|mut item| {
                item.text = item.text.trim().to_string();
                (!item.text.is_empty()).then_some(item)
            })
            .collect();

        let links = self
            .links
            .into_iter()
            .map(|mut link| {
                link.url = link.url.trim().to_string();
                if !is_web_url(&link.url) {
                    return Err(BoardError::invalid_value(
                        "links",
                        format!("'{}' is not an http:// or https:// url", link.url),
                    ));
                }
                link.title = link
                    .title
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty());
                Ok(link)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title,
            description: self.description,
            due_date: self.due_date,
            checklist,
            links,
        })
    }
}

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

fn is_web_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

/// How close a card's due date is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl Card {
    /// Build a card from already-normalized fields
    pub fn from_fields(fields: CardFields) -> Self {
        Self {
            id: CardId::new(),
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            checklist: fields.checklist,
            links: fields.links,
            archived: false,
        }
    }

    /// Full replace of the editable content. Id and archived flag are kept.
    pub fn replace_fields(&mut self, fields: CardFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.due_date = fields.due_date;
        self.checklist = fields.checklist;
        self.links = fields.links;
    }

    /// (completed, total) checklist items
    pub fn checklist_progress(&self) -> (usize, usize) {
        let completed = self.checklist.iter().filter(|item| item.checked).count();
        (completed, self.checklist.len())
    }

    pub fn due_status(&self, today: NaiveDate) -> Option<DueStatus> {
        let days = (self.due_date? - today).num_days();
        Some(if days < 0 {
            DueStatus::Overdue
        } else if days <= DUE_SOON_DAYS {
            DueStatus::DueSoon
        } else {
            DueStatus::Upcoming
        })
    }

    /// Description with markup tags removed, cut to `limit` characters
    pub fn description_preview(&self, limit: usize) -> String {
        let text = MARKUP_TAG.replace_all(&self.description, "");
        let text = text.trim();
        if text.chars().count() > limit {
            let cut: String = text.chars().take(limit).collect();
            format!("{cut}...")
        } else {
            text.to_string()
        }
    }
}
