// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Soft cap on comment length. The live counter reports against it; input is
/// not truncated.
pub const COMMENT_MAX: usize = 300;

/// The discrete rating choices offered by the form.
pub const RATING_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];

/// Length the live counter reports against [`COMMENT_MAX`], in UTF-16 code
/// units — the DOM's notion of string length, which the cap is defined in.
pub fn comment_length(comment: &str) -> usize {
    comment.encode_utf16().count()
}

/// A single persisted review. Created on form submit, never mutated or
/// deleted afterwards. `rating` is stored as a float even though the form
/// only collects whole stars, so finer-grained ratings stay representable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,          // UUIDv4, generated at submit time
    pub rating: f64,         // 1.0..=5.0, whole-number steps today
    pub text: String,        // Trimmed comment text
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>, // RFC 3339 on the wire
}

impl Review {
    pub fn new(input: NewReview) -> Self {
        Review {
            id: Uuid::new_v4().to_string(),
            rating: f64::from(input.rating),
            text: input.text,
            created_at: Utc::now(),
        }
    }

    /// Rating formatted to one decimal place, e.g. "4.0".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Date formatted for display, single fixed locale.
    pub fn date_label(&self) -> String {
        self.created_at.format("%d %b %Y").to_string()
    }
}

/// How many of the five star glyphs render filled for a rating.
/// Round-half-up: 3.5 fills 4 stars, 3.4 fills 3.
pub fn star_fill(rating: f64) -> u8 {
    (rating.round() as u8).min(5)
}

/// Validated form output, ready to become a [`Review`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select a rating.")]
    RatingMissing,
    #[error("Write a comment.")]
    CommentMissing,
}

/// Raw form state as the user left it. `validate` applies the submit rules
/// in order and short-circuits on the first failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: Option<u8>,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        let rating = self.rating.ok_or(ValidationError::RatingMissing)?;
        let text = self.comment.trim();
        if text.is_empty() {
            return Err(ValidationError::CommentMissing);
        }
        Ok(NewReview {
            rating,
            text: text.to_string(),
        })
    }
}

/// Count and arithmetic mean of a review list.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub count: usize,
    pub average: Option<f64>,
}

impl RatingSummary {
    pub fn of(reviews: &[Review]) -> Self {
        let count = reviews.len();
        let average = if count == 0 {
            None
        } else {
            Some(reviews.iter().map(|r| r.rating).sum::<f64>() / count as f64)
        };
        RatingSummary { count, average }
    }

    /// Average to one decimal place, or the "—" sentinel for an empty list.
    pub fn average_label(&self) -> String {
        match self.average {
            Some(avg) => format!("{avg:.1}"),
            None => "—".to_string(),
        }
    }

    /// Count with singular/plural label.
    pub fn count_label(&self) -> String {
        if self.count == 1 {
            "1 review".to_string()
        } else {
            format!("{} reviews", self.count)
        }
    }
}
