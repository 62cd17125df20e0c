use bytes::Bytes;
use http_body::Frame;
use serde::Serialize;
use std::{
    convert::Infallible,
    fmt::{self, Debug},
    pin::Pin,
    task::{self, Poll},
};

/// Request body on a budget
#[derive(Clone)]
pub enum Body {
    /// Empty body
    Empty,

    /// Body consisting of a single chunk
    Full {
        /// Taken out once the body is polled
        data: Option<Bytes>,
    },
}

impl Default for Body {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl Body {
    /// Empty body
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Single byte chunk body
    #[inline]
    pub fn data<D>(data: D) -> Self
    where
        D: Into<Bytes>,
    {
        Self::Full {
            data: Some(data.into()),
        }
    }

    /// Serialise a value into a JSON body
    ///
    /// # Errors
    ///
    /// Serialising the value failed
    #[inline]
    pub fn json<T>(value: &T) -> Result<Self, simd_json::Error>
    where
        T: Serialize + ?Sized,
    {
        simd_json::to_vec(value).map(Self::data)
    }
}

impl Debug for Body {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(std::any::type_name::<Self>())
            .finish_non_exhaustive()
    }
}

impl http_body::Body for Body {
    type Data = Bytes;
    type Error = Infallible;

    #[inline]
    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut task::Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Empty => Poll::Ready(None),
            Self::Full { data } => Poll::Ready(data.take().map(|data| Ok(Frame::data(data)))),
        }
    }

    #[inline]
    fn is_end_stream(&self) -> bool {
        match self {
            Self::Empty | Self::Full { data: None } => true,
            Self::Full { data: Some(..) } => false,
        }
    }

    #[inline]
    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Empty | Self::Full { data: None } => http_body::SizeHint::with_exact(0),
            Self::Full { data: Some(data) } => {
                http_body::SizeHint::with_exact(data.len() as u64)
            }
        }
    }
}
