//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/cats/{cat_id}/edit', use [format_endpoint].

/// The root route which redirects to the catalog.
pub const ROOT: &str = "/";
/// The page listing the cat catalog.
pub const CATALOG_VIEW: &str = "/cats";
/// The dialog for adding a new cat.
pub const NEW_CAT_VIEW: &str = "/cats/new";
/// The dialog for editing an existing cat.
pub const EDIT_CAT_VIEW: &str = "/cats/{cat_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a cat.
pub const CATS_API: &str = "/api/cats";
/// The route to update or delete a single cat.
pub const CAT_API: &str = "/api/cats/{cat_id}";
/// The route to add a cat to, or remove a cat from, the favorites.
pub const FAVORITE_CAT_API: &str = "/api/cats/{cat_id}/favorite";
/// The route to change the breed filter.
pub const VIEW_BREED: &str = "/api/view/breed";
/// The route to change the search term.
pub const VIEW_SEARCH: &str = "/api/view/search";
/// The route to change the current page.
pub const VIEW_PAGE: &str = "/api/view/page";
/// The route to switch between all cats and favorites.
pub const VIEW_TAB: &str = "/api/view/tab";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with a right brace, e.g.
/// '{cat_id}' in '/api/cats/{cat_id}'. Only the first parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
