//! HTML views for the landing and results pages.
//!
//! Pages are small enough to render directly; every user- or
//! upstream-provided string is escaped before it reaches the markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::client::RecipeResult;

const HEALTH_LABELS: &[&str] = &[
    "vegan",
    "vegetarian",
    "sugar-conscious",
    "peanut-free",
    "tree-nut-free",
    "alcohol-free",
];

const DIET_LABELS: &[&str] = &[
    "balanced",
    "high-protein",
    "high-fiber",
    "low-fat",
    "low-carb",
    "low-sodium",
];

/// Landing page: the search form.
pub fn render_index() -> String {
    let mut page = String::new();
    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head><title>Recipe Finder</title></head>\n<body>\n\
         <h1>Recipe Finder</h1>\n\
         <form action=\"/search-recipe\" method=\"get\">\n\
         <label for=\"recipe_search_query\">Dish name</label>\n\
         <input type=\"text\" id=\"recipe_search_query\" name=\"recipe_search_query\">\n",
    );

    page.push_str("<fieldset><legend>Health labels</legend>\n");
    for label in HEALTH_LABELS {
        page.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"health-checkbox\" value=\"{label}\"> {label}</label>\n"
        ));
    }
    page.push_str("</fieldset>\n");

    page.push_str("<fieldset><legend>Diet</legend>\n");
    for label in DIET_LABELS {
        page.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"diet-checkbox\" value=\"{label}\"> {label}</label>\n"
        ));
    }
    page.push_str("</fieldset>\n");

    page.push_str(
        "<label for=\"kcal-input\">Max calories</label>\n\
         <input type=\"number\" id=\"kcal-input\" name=\"kcal-input\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n</body>\n</html>\n",
    );

    page
}

/// Results page for a search.
///
/// `has_more == false` means the upstream reported no further data for this
/// query; an empty result list with `has_more == true` is also what failed
/// searches degrade to.
pub fn render_results(results: &[RecipeResult], has_more: bool) -> String {
    let mut page = String::new();
    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head><title>Search Results</title></head>\n<body>\n\
         <h1>Search Results</h1>\n",
    );

    if !has_more {
        page.push_str("<p class=\"no-more\">No more data available for this search.</p>\n");
    } else if results.is_empty() {
        page.push_str("<p class=\"empty\">No recipes found.</p>\n");
    } else {
        page.push_str("<ul class=\"recipes\">\n");
        for recipe in results {
            page.push_str("<li class=\"recipe\">\n");
            page.push_str(&format!("<h2>{}</h2>\n", encode_text(&recipe.name)));
            page.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                encode_double_quoted_attribute(&recipe.image_url),
                encode_double_quoted_attribute(&recipe.name),
            ));
            page.push_str("<ul class=\"ingredients\">\n");
            for line in &recipe.ingredient_lines {
                page.push_str(&format!("<li>{}</li>\n", encode_text(line)));
            }
            page.push_str("</ul>\n");
            page.push_str(&format!(
                "<a href=\"{}\">Full recipe</a>\n",
                encode_double_quoted_attribute(&recipe.source_url),
            ));
            page.push_str("</li>\n");
        }
        page.push_str("</ul>\n");
    }

    page.push_str("<a href=\"/\">New search</a>\n</body>\n</html>\n");
    page
}
