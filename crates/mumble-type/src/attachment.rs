use crate::ap::AttachmentLink;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use uuid::Uuid;

/// Lifecycle of a locally tracked attachment
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentState {
    Uploading,
    Uploaded,
    Deleting,
}

/// Activity Streams object type of an attachment, derived from its MIME type
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum MediaAttachmentType {
    Audio,
    Document,
    Image,
    Video,
}

impl MediaAttachmentType {
    #[must_use]
    pub fn from_mime_type(mime_type: &str) -> Self {
        let top_level = mime_type.split('/').next().unwrap_or_default();

        if top_level.eq_ignore_ascii_case("image") {
            Self::Image
        } else if top_level.eq_ignore_ascii_case("video") {
            Self::Video
        } else if top_level.eq_ignore_ascii_case("audio") {
            Self::Audio
        } else {
            Self::Document
        }
    }
}

/// Media file attached to a post that is being composed
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Random UUID followed by the extension of the file
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub state: AttachmentState,
    /// Only set once the upload finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attachment {
    /// Start tracking a file that is about to be uploaded
    #[must_use]
    pub fn new<F, M>(filename: F, mime_type: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        let filename = filename.into();
        let extension = filename.rfind('.').map_or("", |idx| &filename[idx..]);
        let id = format!("{}{extension}", Uuid::new_v4());

        Self {
            id,
            filename,
            mime_type: mime_type.into(),
            state: AttachmentState::Uploading,
            url: None,
        }
    }

    pub fn mark_uploaded<U>(&mut self, url: U)
    where
        U: Into<String>,
    {
        self.url = Some(url.into());
        self.state = AttachmentState::Uploaded;
    }

    pub fn mark_deleting(&mut self) {
        self.state = AttachmentState::Deleting;
    }

    /// Link to embed into a post
    ///
    /// `None` until the upload finished
    #[must_use]
    pub fn link(&self) -> Option<AttachmentLink> {
        if self.state != AttachmentState::Uploaded {
            return None;
        }

        let url = self.url.clone()?;
        Some(AttachmentLink {
            r#type: MediaAttachmentType::from_mime_type(&self.mime_type).to_string(),
            media_type: self.mime_type.clone(),
            url,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Attachment, AttachmentState, MediaAttachmentType};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn id_keeps_extension() {
        let attachment = Attachment::new("holiday.photo.png", "image/png");
        assert!(attachment.id.ends_with(".png"));
        assert_eq!(attachment.state, AttachmentState::Uploading);

        let (unique, _) = attachment.id.split_at(attachment.id.len() - ".png".len());
        assert!(Uuid::parse_str(unique).is_ok());
    }

    #[test]
    fn id_without_extension() {
        let attachment = Attachment::new("README", "text/plain");
        assert!(Uuid::parse_str(&attachment.id).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let first = Attachment::new("a.png", "image/png");
        let second = Attachment::new("a.png", "image/png");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn link_after_upload() {
        let mut attachment = Attachment::new("clip.mp4", "video/mp4");
        assert_eq!(attachment.link(), None);

        attachment.mark_uploaded("https://media.example.com/clip.mp4");
        let link = attachment.link().unwrap();
        assert_eq!(link.r#type, "Video");
        assert_eq!(link.media_type, "video/mp4");
        assert_eq!(link.url, "https://media.example.com/clip.mp4");

        attachment.mark_deleting();
        assert_eq!(attachment.link(), None);
    }

    #[test]
    fn media_type_mapping() {
        assert_eq!(
            MediaAttachmentType::from_mime_type("image/webp"),
            MediaAttachmentType::Image
        );
        assert_eq!(
            MediaAttachmentType::from_mime_type("audio/ogg"),
            MediaAttachmentType::Audio
        );
        assert_eq!(
            MediaAttachmentType::from_mime_type("application/pdf"),
            MediaAttachmentType::Document
        );
        assert_eq!(
            MediaAttachmentType::from_mime_type(""),
            MediaAttachmentType::Document
        );
    }
}
