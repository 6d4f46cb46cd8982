//! Core cat domain types.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned to a cat by the backend.
pub type CatId = i64;

/// The image shown for cats added through the catalog.
pub const PLACEHOLDER_IMAGE_URL: &str = "/static/placeholder.svg";

/// A cat as persisted by the backend.
///
/// The backend may send `null` for any of the text columns. These are read as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// The ID assigned by the backend. It never changes once assigned.
    pub id: CatId,
    /// The cat's name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// A description of the cat's breed and temperament.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// The breed name, e.g. "Bengal".
    #[serde(default, deserialize_with = "null_as_default")]
    pub breed: String,
    /// The country or region the breed comes from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: String,
    /// The average lifespan as display text, e.g. "12 - 15".
    #[serde(default, deserialize_with = "null_as_default")]
    pub life_span: String,
    /// The URL of a picture of the cat.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Whether the cat is in the favorites.
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The fields sent to the backend to create a cat. The backend assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCat {
    /// The cat's name.
    pub name: String,
    /// A description of the cat's breed and temperament.
    pub description: String,
    /// The breed name.
    pub breed: String,
    /// The country or region the breed comes from.
    pub origin: String,
    /// The average lifespan as display text.
    pub life_span: String,
    /// The URL of a picture of the cat.
    pub image_url: String,
    /// Whether the cat starts out in the favorites.
    pub favorite: bool,
}

/// A partial update for a cat. Fields left as `None` are not sent and keep
/// their current value on the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatUpdate {
    /// The new name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The new description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The new breed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// The new origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// The new lifespan text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,
    /// The new image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The new favorite flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl CatUpdate {
    /// An update that only sets the favorite flag.
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Default::default()
        }
    }
}

/// Form data for cat creation and editing.
///
/// HTML checkboxes are only submitted when checked, so `favorite` is present
/// (usually as "on") exactly when the box was ticked.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatFormData {
    pub name: String,
    pub description: String,
    pub breed: String,
    pub origin: String,
    pub life_span: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<String>,
}

impl CatFormData {
    /// Build the create request for a new cat with the placeholder image.
    pub fn into_new_cat(self) -> NewCat {
        NewCat {
            favorite: self.favorite.is_some(),
            name: self.name,
            description: self.description,
            breed: self.breed,
            origin: self.origin,
            life_span: self.life_span,
            image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
        }
    }

    /// Build the update request for a full-record edit.
    ///
    /// The favorite flag and the image are left out: the flag has its own
    /// actions and the image cannot be edited in the catalog.
    pub fn into_update(self) -> CatUpdate {
        CatUpdate {
            name: Some(self.name),
            description: Some(self.description),
            breed: Some(self.breed),
            origin: Some(self.origin),
            life_span: Some(self.life_span),
            image_url: None,
            favorite: None,
        }
    }
}
