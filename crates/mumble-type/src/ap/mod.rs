use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub mod collection;

pub const ACTIVITY_STREAMS_MIME_TYPE: &str = "application/activity+json";
pub const PUBLIC_IDENTIFIER: &str = "https://www.w3.org/ns/activitystreams#Public";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ObjectType {
    #[default]
    Note,
}

impl ObjectType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "Note",
        }
    }
}

/// Post as returned by the backend
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub r#type: ObjectType,
    pub id: String,
    /// Publication date, e.g. `2023-06-11T01:00:23Z`
    pub published: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PostSource>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Vec<AttachmentLink>>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSource {
    pub content: String,
    pub media_type: String,
}

/// Post that is about to be submitted
///
/// The ID and the publication date are assigned by the server
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[builder(default, setter(skip))]
    pub r#type: ObjectType,
    #[builder(setter(into))]
    pub content: String,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PostSource>,
    #[builder(default)]
    pub to: Vec<String>,
    #[builder(default)]
    pub cc: Vec<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Vec<AttachmentLink>>,
}

impl NewPost {
    /// Post addressed to the public collection
    #[must_use]
    pub fn public<C>(content: C) -> Self
    where
        C: Into<String>,
    {
        Self::builder()
            .content(content)
            .to(vec![PUBLIC_IDENTIFIER.into()])
            .build()
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.to.iter().any(|url| url == PUBLIC_IDENTIFIER)
    }
}

/// Reference to previously uploaded media
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentLink {
    pub r#type: String,
    pub media_type: String,
    pub url: String,
}
