//! Drinks API access built on the deployment's `api_server_url`.

mod client;
mod error;
mod target;
mod types;

pub use client::DrinksClient;
pub use error::{ApiError, Result};
pub use target::request_target;
pub use types::{Drink, DrinkPatch, Ingredient, NewDrink};

use async_trait::async_trait;

/// Operations offered by the drinks API.
///
/// Methods taking a `token` send it as a bearer token; the server checks the
/// permission named on each method.
#[async_trait]
pub trait DrinksApi: Send + Sync {
    /// Listing with the short recipe form (colors and parts only).
    ///
    /// The server guards this with `get:drinks`, so pass a token when one is
    /// available.
    async fn list_drinks(&self, token: Option<&str>) -> Result<Vec<Drink>>;

    /// Full recipes. Requires `get:drinks-detail`.
    async fn list_drink_details(&self, token: &str) -> Result<Vec<Drink>>;

    /// Requires `post:drinks`.
    async fn create_drink(&self, token: &str, drink: &NewDrink) -> Result<Drink>;

    /// Requires `patch:drinks`.
    async fn update_drink(&self, token: &str, id: u64, patch: &DrinkPatch) -> Result<Drink>;

    /// Returns the id of the deleted drink. Requires `delete:drinks`.
    async fn delete_drink(&self, token: &str, id: u64) -> Result<u64>;
}
