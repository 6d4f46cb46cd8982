//! The REST backend that owns the cat records.
//!
//! The catalog never persists anything itself. Every mutation goes through a
//! [CatBackend], and the catalog mirrors whatever the backend sends back.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Error,
    cat::{Cat, CatId, CatUpdate, NewCat},
};

/// CRUD access to the cat records.
#[async_trait]
pub trait CatBackend: Send + Sync {
    /// Fetch every cat.
    async fn list_cats(&self) -> Result<Vec<Cat>, Error>;

    /// Create a cat and return it with the ID assigned by the backend.
    async fn create_cat(&self, new_cat: NewCat) -> Result<Cat, Error>;

    /// Apply `update` to the cat with `cat_id` and return the stored record.
    async fn update_cat(&self, cat_id: CatId, update: CatUpdate) -> Result<Cat, Error>;

    /// Delete the cat with `cat_id`.
    async fn delete_cat(&self, cat_id: CatId) -> Result<(), Error>;
}

/// How long to wait for the backend before giving up on a request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A [CatBackend] that talks JSON over HTTP to `{base_url}/api/cats`.
#[derive(Debug, Clone)]
pub struct HttpCatBackend {
    client: Client,
    base_url: String,
}

impl HttpCatBackend {
    /// Create a client for the backend at `base_url`, e.g. "http://127.0.0.1:5000".
    ///
    /// # Errors
    /// Returns [Error::ClientBuildError] if the HTTP client cannot be configured.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| Error::ClientBuildError(error.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn cats_url(&self) -> String {
        format!("{}/api/cats", self.base_url)
    }

    fn cat_url(&self, cat_id: CatId) -> String {
        format!("{}/api/cats/{cat_id}", self.base_url)
    }
}

#[async_trait]
impl CatBackend for HttpCatBackend {
    async fn list_cats(&self) -> Result<Vec<Cat>, Error> {
        let url = self.cats_url();
        tracing::debug!("GET {url}");

        let cats = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Cat>>()
            .await
            .inspect_err(|error| tracing::error!("could not decode cats from {url}: {error}"))?;

        tracing::debug!("fetched {} cats", cats.len());

        Ok(cats)
    }

    async fn create_cat(&self, new_cat: NewCat) -> Result<Cat, Error> {
        let url = self.cats_url();
        tracing::debug!("POST {url}: {new_cat:?}");

        let cat = self
            .client
            .post(&url)
            .json(&new_cat)
            .send()
            .await?
            .error_for_status()?
            .json::<Cat>()
            .await?;

        Ok(cat)
    }

    async fn update_cat(&self, cat_id: CatId, update: CatUpdate) -> Result<Cat, Error> {
        let url = self.cat_url(cat_id);
        tracing::debug!("PUT {url}: {update:?}");

        let cat = self
            .client
            .put(&url)
            .json(&update)
            .send()
            .await?
            .error_for_status()?
            .json::<Cat>()
            .await?;

        Ok(cat)
    }

    async fn delete_cat(&self, cat_id: CatId) -> Result<(), Error> {
        let url = self.cat_url(cat_id);
        tracing::debug!("DELETE {url}");

        self.client.delete(&url).send().await?.error_for_status()?;

        Ok(())
    }
}
