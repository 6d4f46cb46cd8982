//! The locally cached catalog and the state of the views over it.
//!
//! The cached list mirrors the backend and is only changed with records the
//! backend sent back. The "all" and "favorites" views are recomputed from it
//! on every call to [Catalog::view].

use serde::{Deserialize, Serialize};

use crate::{
    cat::{Cat, CatId},
    pagination::page_count,
};

/// The form value of the breed select that disables the breed filter.
pub const ALL_BREEDS: &str = "all";

/// Which breed the catalog is limited to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BreedFilter {
    /// Show every breed.
    #[default]
    All,
    /// Show only cats whose breed is exactly this string.
    Breed(String),
}

impl BreedFilter {
    /// Parse the value submitted by the breed select.
    pub fn from_form_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_BREEDS {
            BreedFilter::All
        } else {
            BreedFilter::Breed(value.to_owned())
        }
    }

    /// The value the breed select should have for this filter.
    pub fn as_form_value(&self) -> &str {
        match self {
            BreedFilter::All => ALL_BREEDS,
            BreedFilter::Breed(breed) => breed,
        }
    }

    fn matches(&self, cat: &Cat) -> bool {
        match self {
            BreedFilter::All => true,
            BreedFilter::Breed(breed) => cat.breed == *breed,
        }
    }
}

/// The two views of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    /// Every cat matching the filters.
    #[default]
    All,
    /// The favorite cats matching the filters.
    Favorites,
}

impl CatalogTab {
    /// The form value for this tab.
    pub fn as_form_value(self) -> &'static str {
        match self {
            CatalogTab::All => "all",
            CatalogTab::Favorites => "favorites",
        }
    }
}

/// One page of the active view, detached from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// The cats on the current page.
    pub cats: Vec<Cat>,
    /// The tab the page belongs to.
    pub tab: CatalogTab,
    /// The current page, starting from 1.
    pub page: u64,
    /// The number of pages in the active view. Zero when the view is empty.
    pub page_count: u64,
    /// The number of cats matching the filters.
    pub filtered_count: usize,
    /// The number of favorite cats matching the filters.
    pub favorite_count: usize,
}

/// The cached cat list plus the filter, search, tab and page the user chose.
#[derive(Debug, Clone)]
pub struct Catalog {
    cats: Vec<Cat>,
    is_loaded: bool,
    breed_filter: BreedFilter,
    search: String,
    tab: CatalogTab,
    page: u64,
    page_size: u64,
}

impl Catalog {
    /// Create an empty catalog that shows `page_size` cats per page.
    pub fn new(page_size: u64) -> Self {
        Self {
            cats: Vec::new(),
            is_loaded: false,
            breed_filter: BreedFilter::All,
            search: String::new(),
            tab: CatalogTab::All,
            page: 1,
            page_size,
        }
    }

    /// Whether the catalog has received the cat list from the backend at least once.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Mirror the full list returned by the backend.
    pub fn replace_all(&mut self, cats: Vec<Cat>) {
        self.cats = cats;
        self.is_loaded = true;
    }

    /// Replace the cached cat that has the same ID as `cat`.
    ///
    /// Returns `false`, and changes nothing, if no such cat is cached.
    pub fn apply_update(&mut self, cat: Cat) -> bool {
        match self.cats.iter_mut().find(|cached| cached.id == cat.id) {
            Some(cached) => {
                *cached = cat;
                true
            }
            None => false,
        }
    }

    /// Add a cat the backend has just created.
    pub fn insert(&mut self, cat: Cat) {
        self.cats.push(cat);
    }

    /// Drop the cat with `cat_id` from the cache.
    ///
    /// Returns `false` if no such cat is cached.
    pub fn remove(&mut self, cat_id: CatId) -> bool {
        let count_before = self.cats.len();
        self.cats.retain(|cat| cat.id != cat_id);

        self.cats.len() != count_before
    }

    /// Get the cached cat with `cat_id`.
    pub fn get(&self, cat_id: CatId) -> Option<&Cat> {
        self.cats.iter().find(|cat| cat.id == cat_id)
    }

    /// Every distinct breed in the cache, in the order first seen.
    pub fn breeds(&self) -> Vec<&str> {
        let mut breeds: Vec<&str> = Vec::new();

        for cat in &self.cats {
            if !cat.breed.is_empty() && !breeds.contains(&cat.breed.as_str()) {
                breeds.push(&cat.breed);
            }
        }

        breeds
    }

    pub fn breed_filter(&self) -> &BreedFilter {
        &self.breed_filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Limit the catalog to `breed_filter` and go back to the first page.
    pub fn set_breed_filter(&mut self, breed_filter: BreedFilter) {
        self.breed_filter = breed_filter;
        self.page = 1;
    }

    /// Change the search term and go back to the first page.
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
        self.page = 1;
    }

    /// Switch tabs and go back to the first page.
    pub fn set_tab(&mut self, tab: CatalogTab) {
        self.tab = tab;
        self.page = 1;
    }

    /// Go to `page`. Pages start from 1.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// The cats matching both the breed filter and the search term.
    fn filtered(&self) -> impl Iterator<Item = &Cat> {
        let search = self.search.trim().to_lowercase();

        self.cats
            .iter()
            .filter(move |cat| self.breed_filter.matches(cat) && matches_search(cat, &search))
    }

    /// Compute the current page of the active tab.
    ///
    /// The page is clamped to the last page, so removing cats never leaves
    /// the user on a page past the end.
    pub fn view(&self) -> CatalogView {
        let filtered: Vec<&Cat> = self.filtered().collect();
        let favorites: Vec<&Cat> = filtered.iter().copied().filter(|cat| cat.favorite).collect();

        let active = match self.tab {
            CatalogTab::All => &filtered,
            CatalogTab::Favorites => &favorites,
        };

        let page_count = page_count(active.len() as u64, self.page_size);
        let page = self.page.clamp(1, page_count.max(1));
        let offset = ((page - 1) * self.page_size) as usize;

        let cats = active
            .iter()
            .skip(offset)
            .take(self.page_size as usize)
            .map(|&cat| cat.clone())
            .collect();

        CatalogView {
            cats,
            tab: self.tab,
            page,
            page_count,
            filtered_count: filtered.len(),
            favorite_count: favorites.len(),
        }
    }
}

/// Case-insensitive substring match against the name or the breed.
///
/// `lowercase_search` must already be lowercase. An empty search matches every cat.
fn matches_search(cat: &Cat, lowercase_search: &str) -> bool {
    lowercase_search.is_empty()
        || cat.name.to_lowercase().contains(lowercase_search)
        || cat.breed.to_lowercase().contains(lowercase_search)
}
