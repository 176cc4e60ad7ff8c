//! Site layout content blocks.
//!
//! One row per kind: banner, FAQ, or category list. Only the payload
//! column matching the kind is populated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use learnhub_core::traits::media::MediaAsset;

/// The kind of a layout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "layout_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Banner,
    Faq,
    Categories,
}

impl LayoutKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Faq => "faq",
            Self::Categories => "categories",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = learnhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banner" => Ok(Self::Banner),
            "faq" => Ok(Self::Faq),
            "categories" => Ok(Self::Categories),
            _ => Err(learnhub_core::AppError::validation(format!(
                "Invalid layout kind: '{s}'. Expected one of: banner, faq, categories"
            ))),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Banner image on the media host.
    pub image: MediaAsset,
    /// Headline.
    pub title: String,
    /// Sub-headline.
    pub sub_title: String,
}

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One course category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// A layout row. Exactly one payload column is set, matching `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Layout {
    /// Unique layout identifier.
    pub id: Uuid,
    /// Which block this row holds.
    pub kind: LayoutKind,
    /// Banner payload.
    pub banner: Option<Json<Banner>>,
    /// FAQ payload.
    pub faq: Option<Json<Vec<FaqItem>>>,
    /// Categories payload.
    pub categories: Option<Json<Vec<Category>>>,
    /// When the layout was created.
    pub created_at: DateTime<Utc>,
    /// When the layout was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("banner".parse::<LayoutKind>().unwrap(), LayoutKind::Banner);
        assert_eq!("FAQ".parse::<LayoutKind>().unwrap(), LayoutKind::Faq);
        assert!("hero".parse::<LayoutKind>().is_err());
    }
}
