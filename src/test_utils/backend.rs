use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    Error,
    cat::{Cat, CatBackend, CatId, CatUpdate, Catalog, CatalogState, NewCat},
};

/// An in-memory stand-in for the cat REST service.
///
/// When failing, every call returns [Error::BackendUnavailable] and leaves the
/// stored records alone.
pub(crate) struct FakeCatBackend {
    cats: Mutex<Vec<Cat>>,
    failing: AtomicBool,
}

impl FakeCatBackend {
    pub(crate) fn with_cats(cats: Vec<Cat>) -> Self {
        Self {
            cats: Mutex::new(cats),
            failing: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Add a record behind the catalog's back, as another client would.
    pub(crate) fn insert_directly(&self, cat: Cat) {
        self.cats.lock().unwrap().push(cat);
    }

    pub(crate) fn cats(&self) -> Vec<Cat> {
        self.cats.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(Error::BackendUnavailable("connection refused".to_owned()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatBackend for FakeCatBackend {
    async fn list_cats(&self) -> Result<Vec<Cat>, Error> {
        self.check_available()?;
        Ok(self.cats())
    }

    async fn create_cat(&self, new_cat: NewCat) -> Result<Cat, Error> {
        self.check_available()?;
        let mut cats = self.cats.lock().unwrap();
        let id = cats.iter().map(|cat| cat.id).max().unwrap_or(0) + 1;
        let cat = Cat {
            id,
            name: new_cat.name,
            description: new_cat.description,
            breed: new_cat.breed,
            origin: new_cat.origin,
            life_span: new_cat.life_span,
            image_url: new_cat.image_url,
            favorite: new_cat.favorite,
        };
        cats.push(cat.clone());

        Ok(cat)
    }

    async fn update_cat(&self, cat_id: CatId, update: CatUpdate) -> Result<Cat, Error> {
        self.check_available()?;
        let mut cats = self.cats.lock().unwrap();
        let cat = cats
            .iter_mut()
            .find(|cat| cat.id == cat_id)
            .ok_or(Error::NotFound)?;

        let CatUpdate {
            name,
            description,
            breed,
            origin,
            life_span,
            image_url,
            favorite,
        } = update;
        if let Some(name) = name {
            cat.name = name;
        }
        if let Some(description) = description {
            cat.description = description;
        }
        if let Some(breed) = breed {
            cat.breed = breed;
        }
        if let Some(origin) = origin {
            cat.origin = origin;
        }
        if let Some(life_span) = life_span {
            cat.life_span = life_span;
        }
        if let Some(image_url) = image_url {
            cat.image_url = image_url;
        }
        if let Some(favorite) = favorite {
            cat.favorite = favorite;
        }

        Ok(cat.clone())
    }

    async fn delete_cat(&self, cat_id: CatId) -> Result<(), Error> {
        self.check_available()?;
        let mut cats = self.cats.lock().unwrap();
        let len_before = cats.len();
        cats.retain(|cat| cat.id != cat_id);

        if cats.len() == len_before {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn sample_cat(id: CatId, name: &str, breed: &str, favorite: bool) -> Cat {
    Cat {
        id,
        name: name.to_owned(),
        description: "A cat".to_owned(),
        breed: breed.to_owned(),
        origin: "Egypt".to_owned(),
        life_span: "12 - 15".to_owned(),
        image_url: "https://example.com/cat.jpg".to_owned(),
        favorite,
    }
}

/// A catalog state over `backend` whose catalog has not been loaded yet.
pub(crate) fn catalog_state_with(backend: Arc<FakeCatBackend>, page_size: u64) -> CatalogState {
    CatalogState {
        backend,
        catalog: Arc::new(Mutex::new(Catalog::new(page_size))),
        max_pages: 5,
    }
}

/// A catalog state whose backend and catalog both hold `cats`.
pub(crate) fn loaded_catalog_state(
    cats: Vec<Cat>,
    page_size: u64,
) -> (Arc<FakeCatBackend>, CatalogState) {
    let backend = Arc::new(FakeCatBackend::with_cats(cats.clone()));
    let state = catalog_state_with(backend.clone(), page_size);
    state.catalog.lock().unwrap().replace_all(cats);

    (backend, state)
}
