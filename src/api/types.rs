//! Drinks API payloads.

use serde::{Deserialize, Serialize};

/// One ingredient of a drink recipe.
///
/// The public listing omits `name`; the detail listing includes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub parts: u32,
}

/// A drink as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Drink {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub recipe: Vec<Ingredient>,
}

/// Body of `POST /drinks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Body of `PATCH /drinks/<id>`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Vec<Ingredient>>,
}

/// Success envelope shared by every drinks endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DrinksResponse {
    pub success: bool,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    /// Id of a deleted drink, when the server reports it this way.
    #[serde(default)]
    pub delete: Option<u64>,
}

/// Failure bodies: `{"message": ...}` from route errors and
/// `{"code": ..., "description": ...}` from auth errors.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        match (self.message, self.code, self.description) {
            (Some(message), _, _) => Some(message),
            (None, Some(code), Some(description)) => Some(format!("{}: {}", code, description)),
            (None, None, Some(description)) => Some(description),
            (None, Some(code), None) => Some(code),
            (None, None, None) => None,
        }
    }
}
