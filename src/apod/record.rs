// SPDX-License-Identifier: MPL-2.0
//! Typed interpretation of picture service replies.

use serde::Deserialize;

use super::client::ApiResponse;

/// Media category reported by the service for an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Any category this viewer does not render.
    #[serde(other)]
    Other,
}

/// One day's entry in the picture archive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PictureRecord {
    pub date: String,
    pub title: String,
    pub url: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl PictureRecord {
    /// Caption shown under the picture: the title, with the copyright
    /// holder appended when the service reports one.
    #[must_use]
    pub fn caption(&self) -> String {
        match &self.copyright {
            Some(copyright) => format!("{} (Copyright {})", self.title, copyright),
            None => self.title.clone(),
        }
    }
}

/// Envelope the service wraps structured failures in.
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// What a completed service round trip means for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The service returned a valid archive entry.
    Picture(PictureRecord),
    /// The service answered, but with an error message instead of an entry.
    ServiceError(String),
}

/// Interprets a raw service reply as a typed outcome.
///
/// Successful replies are parsed as a [`PictureRecord`] first. Replies
/// that do not fit, successful or not, fall back to the service's error
/// envelope, and finally to the bare HTTP status text.
#[must_use]
pub fn interpret(response: &ApiResponse) -> RefreshOutcome {
    if response.success {
        if let Ok(record) = serde_json::from_str::<PictureRecord>(&response.body) {
            return RefreshOutcome::Picture(record);
        }
    }

    if let Ok(reply) = serde_json::from_str::<ErrorReply>(&response.body) {
        return RefreshOutcome::ServiceError(reply.error.message);
    }

    RefreshOutcome::ServiceError(response.status_text.clone())
}
