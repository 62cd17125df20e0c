//! Paging through `OrderedCollection`s
//!
//! A collection only links to its first page. Pages hold the items as opaque JSON, turning them into something
//! useful is left to an extractor.

use crate::{
    error::{Error, Result},
    MumbleApi,
};
use futures_util::future;
use mumble_type::{
    ap::collection::{Collection, CollectionPage},
    validate, Post,
};
use simd_json::{prelude::*, OwnedValue};
use std::future::Future;

pub struct OrderedCollection<'a> {
    api: &'a MumbleApi,
    inner: Collection,
}

impl<'a> OrderedCollection<'a> {
    /// Wrap a collection document
    ///
    /// # Errors
    ///
    /// The document has no string `first` link
    pub fn new(api: &'a MumbleApi, value: &OwnedValue) -> Result<Self> {
        let inner = validate::validate_collection(value).map_err(Error::MalformedCollection)?;

        Ok(Self { api, inner })
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.inner.id.as_deref()
    }

    #[must_use]
    pub fn total_items(&self) -> Option<u64> {
        self.inner.total_items
    }

    /// URL of the first page
    #[must_use]
    pub fn first(&self) -> &str {
        &self.inner.first
    }

    /// Fetch the first page of the collection
    ///
    /// # Errors
    ///
    /// - The request failed
    /// - The payload isn't a page with an `orderedItems` array
    pub async fn get_first_page(&self) -> Result<OrderedCollectionPage> {
        self.api
            .scoped(async {
                let payload = self.api.get_activity_json(self.first()).await?;
                OrderedCollectionPage::try_from(&payload)
            })
            .await
    }
}

#[derive(Clone, Debug)]
pub struct OrderedCollectionPage {
    inner: CollectionPage,
}

impl TryFrom<&OwnedValue> for OrderedCollectionPage {
    type Error = Error;

    fn try_from(value: &OwnedValue) -> Result<Self, Self::Error> {
        let inner = validate::validate_collection_page(value).map_err(Error::MalformedPage)?;

        Ok(Self { inner })
    }
}

impl OrderedCollectionPage {
    #[must_use]
    pub fn items(&self) -> &[OwnedValue] {
        &self.inner.ordered_items
    }

    /// URL of the following page, if the server announced one
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.inner.next.as_deref()
    }

    /// Run the extractor over every item concurrently
    ///
    /// Items mapped to `None` are skipped. The remaining results keep the order of the page, regardless of the
    /// order the extractions finish in.
    pub async fn extract_items<'s, F, Fut, T>(&'s self, extractor: F) -> Vec<T>
    where
        F: Fn(&'s OwnedValue) -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        future::join_all(self.items().iter().map(extractor))
            .await
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Extractor returning the `object` of an activity if it is a valid post
#[allow(clippy::unused_async)]
pub async fn extract_post(item: &OwnedValue) -> Option<Post> {
    let object = item.as_object()?.get("object")?;
    validate::validate_post(object).ok()
}
