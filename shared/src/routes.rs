#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Signup,
    Login,
    Profile,
    Outfits,
    OutfitDetail(i64),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let parts = path.split('/').filter(|part| !part.is_empty()).collect::<Vec<_>>();
        match parts.as_slice() {
            [] => Route::Home,
            ["signup"] => Route::Signup,
            ["login"] => Route::Login,
            ["profile"] => Route::Profile,
            ["outfits"] => Route::Outfits,
            ["outfits", id] => id.parse().map_or(Route::NotFound, Route::OutfitDetail),
            _ => Route::NotFound,
        }
    }

    pub fn to_url(&self) -> String {
        match *self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Login => "/login".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Outfits => "/outfits".to_string(),
            Route::OutfitDetail(id) => format!("/outfits/{id}"),
        }
    }
}
