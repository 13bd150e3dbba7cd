//! Type definitions for the upstream recipe-search API.
//!
//! This module contains the data structures exchanged with the upstream
//! service and the crate-internal search types built from inbound requests.
//!
//! ## Key Types
//!
//! - [`SearchQuery`] - A single user search, built from form input
//! - [`RecipeResult`] - One render-ready recipe extracted from an upstream hit
//! - [`SearchPage`] - The client's success value: results plus the paging flag
//! - [`SearchResponse`] - Wire shape of the upstream JSON body

use serde::Deserialize;

/// A recipe search as entered by the user.
///
/// Optional fields left empty by the user are omitted from the outbound
/// query payload entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Name of the dish to search for (the `q` parameter)
    pub dish_name: String,
    /// Selected health labels (vegan, gluten-free, ...), zero or more
    pub health_labels: Vec<String>,
    /// Selected diet label (balanced, high-protein, ...), at most one
    pub diet_label: Option<String>,
    /// Maximum calories per serving
    pub max_calories: Option<u32>,
}

/// One recipe extracted from an upstream hit, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeResult {
    /// Recipe name (`recipe.label` upstream)
    pub name: String,
    /// Ingredient lines in upstream order
    pub ingredient_lines: Vec<String>,
    /// Link to the full recipe
    pub source_url: String,
    /// Link to the recipe image
    pub image_url: String,
}

/// A successful search outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Recipes extracted from the upstream hit list, in order
    pub results: Vec<RecipeResult>,
    /// Whether the upstream reported further data beyond this page
    pub has_more: bool,
}

/// Wire shape of the upstream search response body.
///
/// Both fields default so that a terse `{"more": false}` body (or one
/// omitting `more` entirely) deserializes to the no-further-data state.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One entry of the upstream hit list.
#[derive(Debug, Deserialize)]
pub struct Hit {
    pub recipe: HitRecipe,
}

/// The nested recipe record inside a hit.
#[derive(Debug, Deserialize)]
pub struct HitRecipe {
    pub label: String,
    #[serde(rename = "ingredientLines", default)]
    pub ingredient_lines: Vec<String>,
    pub url: String,
    pub image: String,
}

impl From<Hit> for RecipeResult {
    fn from(hit: Hit) -> Self {
        RecipeResult {
            name: hit.recipe.label,
            ingredient_lines: hit.recipe.ingredient_lines,
            source_url: hit.recipe.url,
            image_url: hit.recipe.image,
        }
    }
}
