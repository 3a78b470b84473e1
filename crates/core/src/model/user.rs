use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::UserId;

/// Language the interface and translations are shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceLanguage {
    #[default]
    En,
    Fr,
}

impl InterfaceLanguage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Premium,
}

/// Account profile returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<Url>,
    pub preferred_language: InterfaceLanguage,
    pub subscription: SubscriptionPlan,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            avatar_url: None,
            preferred_language: InterfaceLanguage::default(),
            subscription: SubscriptionPlan::default(),
            created_at: now,
        }
    }

    /// First letter of the display name, used as an avatar placeholder.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .map_or('U', |c| c.to_uppercase().next().unwrap_or(c))
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.subscription == SubscriptionPlan::Premium
    }
}
