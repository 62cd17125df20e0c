pub mod ap;
pub mod attachment;
pub mod user_config;
pub mod validate;

pub use self::{
    ap::{AttachmentLink, NewPost, Post, PostSource},
    attachment::{Attachment, AttachmentState},
    user_config::UserConfig,
    validate::{Validate, ValidationError, ValidationErrorKind},
};
