//! Structural validation of untrusted JSON documents
//!
//! Every validator walks the document in a fixed order and stops at the first check that fails.
//! The returned [`ValidationError`] names the field that failed and why.

use crate::{
    ap::{
        collection::{Collection, CollectionPage},
        AttachmentLink, ObjectType, Post, PostSource,
    },
    user_config::UserConfig,
};
use simd_json::{owned::Object, prelude::*, OwnedValue, StaticNode};
use thiserror::Error;

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

const ROOT: &str = "$";

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ValidationErrorKind {
    #[error("expected an object")]
    NotAnObject,

    #[error("missing field")]
    Missing,

    #[error("expected a string")]
    ExpectedString,

    #[error("expected an array")]
    ExpectedArray,

    #[error("expected {0:?}")]
    UnexpectedValue(&'static str),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    path: String,
    kind: ValidationErrorKind,
}

impl ValidationError {
    fn new<P>(path: P, kind: ValidationErrorKind) -> Self
    where
        P: Into<String>,
    {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Path of the offending field, e.g. `$.attachment[1].url`
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

/// Type that can be checked out of an arbitrary JSON value
pub trait Validate: Sized {
    fn validate(value: &OwnedValue) -> Result<Self>;

    fn is_valid(value: &OwnedValue) -> bool {
        Self::validate(value).is_ok()
    }
}

impl Validate for UserConfig {
    fn validate(value: &OwnedValue) -> Result<Self> {
        validate_user_config(value)
    }
}

impl Validate for Post {
    fn validate(value: &OwnedValue) -> Result<Self> {
        validate_post(value)
    }
}

impl Validate for AttachmentLink {
    fn validate(value: &OwnedValue) -> Result<Self> {
        validate_attachment_link(value)
    }
}

impl Validate for Collection {
    fn validate(value: &OwnedValue) -> Result<Self> {
        validate_collection(value)
    }
}

impl Validate for CollectionPage {
    fn validate(value: &OwnedValue) -> Result<Self> {
        validate_collection_page(value)
    }
}

#[inline]
fn is_null(value: &OwnedValue) -> bool {
    matches!(value, OwnedValue::Static(StaticNode::Null))
}

/// View over the fields of an object located at `path`
struct Fields<'a> {
    object: &'a Object,
    path: &'a str,
}

impl<'a> Fields<'a> {
    fn new(value: &'a OwnedValue, path: &'a str) -> Result<Self> {
        value
            .as_object()
            .map(|object| Self { object, path })
            .ok_or_else(|| ValidationError::new(path, ValidationErrorKind::NotAnObject))
    }

    fn path_of(&self, name: &str) -> String {
        format!("{}.{name}", self.path)
    }

    fn error(&self, name: &str, kind: ValidationErrorKind) -> ValidationError {
        ValidationError::new(self.path_of(name), kind)
    }

    fn required(&self, name: &str) -> Result<&'a OwnedValue> {
        self.object
            .get(name)
            .ok_or_else(|| self.error(name, ValidationErrorKind::Missing))
    }

    /// Present and not `null`
    fn optional(&self, name: &str) -> Option<&'a OwnedValue> {
        self.object.get(name).filter(|value| !is_null(value))
    }

    fn string(&self, name: &str) -> Result<&'a str> {
        self.required(name)?
            .as_str()
            .ok_or_else(|| self.error(name, ValidationErrorKind::ExpectedString))
    }

    /// Lenient lookup for informational fields
    fn optional_string(&self, name: &str) -> Option<String> {
        self.optional(name)
            .and_then(|value| value.as_str())
            .map(ToOwned::to_owned)
    }

    fn literal(&self, name: &str, expected: &'static str) -> Result<()> {
        match self.required(name)?.as_str() {
            Some(value) if value == expected => Ok(()),
            _ => Err(self.error(name, ValidationErrorKind::UnexpectedValue(expected))),
        }
    }

    fn array(&self, name: &str) -> Result<&'a [OwnedValue]> {
        self.required(name)?
            .as_array()
            .map(|array| array.as_slice())
            .ok_or_else(|| self.error(name, ValidationErrorKind::ExpectedArray))
    }

    fn string_array(&self, name: &str) -> Result<Vec<String>> {
        self.array(name)?
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                value.as_str().map(ToOwned::to_owned).ok_or_else(|| {
                    ValidationError::new(
                        format!("{}[{idx}]", self.path_of(name)),
                        ValidationErrorKind::ExpectedString,
                    )
                })
            })
            .collect()
    }
}

fn user_config_at(value: &OwnedValue, path: &str) -> Result<UserConfig> {
    let fields = Fields::new(value, path)?;

    Ok(UserConfig {
        objects_bucket_name: fields.string("objectsBucketName")?.to_owned(),
    })
}

fn attachment_link_at(value: &OwnedValue, path: &str) -> Result<AttachmentLink> {
    let fields = Fields::new(value, path)?;
    let r#type = fields.string("type")?.to_owned();
    let media_type = fields.string("mediaType")?.to_owned();
    let url = fields.string("url")?.to_owned();

    Ok(AttachmentLink {
        r#type,
        media_type,
        url,
    })
}

fn post_source_at(value: &OwnedValue, path: &str) -> Result<PostSource> {
    let fields = Fields::new(value, path)?;
    let content = fields.string("content")?.to_owned();
    let media_type = fields.string("mediaType")?.to_owned();

    Ok(PostSource {
        content,
        media_type,
    })
}

fn post_at(value: &OwnedValue, path: &str) -> Result<Post> {
    let fields = Fields::new(value, path)?;
    fields.literal("type", ObjectType::Note.as_str())?;
    let id = fields.string("id")?.to_owned();
    let published = fields.string("published")?.to_owned();
    let content = fields.string("content")?.to_owned();
    let to = fields.string_array("to")?;
    let cc = fields.string_array("cc")?;

    let attachment = fields
        .optional("attachment")
        .map(|value| {
            let path = fields.path_of("attachment");
            let links = value
                .as_array()
                .ok_or_else(|| ValidationError::new(&*path, ValidationErrorKind::ExpectedArray))?;

            links
                .iter()
                .enumerate()
                .map(|(idx, link)| attachment_link_at(link, &format!("{path}[{idx}]")))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    // Not part of the acceptance rule. A malformed source is dropped instead of rejecting the post.
    let source = fields
        .optional("source")
        .and_then(|value| post_source_at(value, &fields.path_of("source")).ok());

    Ok(Post {
        r#type: ObjectType::Note,
        id,
        published,
        content,
        source,
        to,
        cc,
        attachment,
    })
}

fn collection_at(value: &OwnedValue, path: &str) -> Result<Collection> {
    let fields = Fields::new(value, path)?;
    let first = fields.string("first")?.to_owned();

    Ok(Collection {
        id: fields.optional_string("id"),
        total_items: fields.optional("totalItems").and_then(|value| value.as_u64()),
        first,
        last: fields.optional_string("last"),
    })
}

fn collection_page_at(value: &OwnedValue, path: &str) -> Result<CollectionPage> {
    let fields = Fields::new(value, path)?;
    let ordered_items = fields.array("orderedItems")?.to_vec();

    Ok(CollectionPage {
        id: fields.optional_string("id"),
        next: fields.optional_string("next"),
        prev: fields.optional_string("prev"),
        part_of: fields.optional_string("partOf"),
        ordered_items,
    })
}

pub fn validate_user_config(value: &OwnedValue) -> Result<UserConfig> {
    user_config_at(value, ROOT)
}

pub fn validate_post(value: &OwnedValue) -> Result<Post> {
    post_at(value, ROOT)
}

pub fn validate_attachment_link(value: &OwnedValue) -> Result<AttachmentLink> {
    attachment_link_at(value, ROOT)
}

/// Accepts any object with a string `first` link
pub fn validate_collection(value: &OwnedValue) -> Result<Collection> {
    collection_at(value, ROOT)
}

/// Accepts any object with an `orderedItems` array, whatever the items are
pub fn validate_collection_page(value: &OwnedValue) -> Result<CollectionPage> {
    collection_page_at(value, ROOT)
}

#[must_use]
pub fn is_user_config(value: &OwnedValue) -> bool {
    validate_user_config(value).is_ok()
}

#[must_use]
pub fn is_post(value: &OwnedValue) -> bool {
    validate_post(value).is_ok()
}

#[must_use]
pub fn is_attachment_link(value: &OwnedValue) -> bool {
    validate_attachment_link(value).is_ok()
}
