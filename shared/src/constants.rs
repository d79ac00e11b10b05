pub static API_BASE: &str = match option_env!("STYLESWAP_API") {
    Some(base) => base,
    None => "http://localhost:5000",
};

pub static ROOT_API: &str = "api";
pub static ROOT_UPLOADS: &str = "Uploads";

pub static API_CHECK_AUTH: &str = "check-auth";
pub static API_LOGIN: &str = "login";
pub static API_LOGOUT: &str = "logout";
pub static API_SIGNUP: &str = "signup";
pub static API_OUTFITS: &str = "outfits";
pub static API_SEARCH: &str = "search";
pub static API_USERS: &str = "users";
pub static API_RATINGS: &str = "ratings";

pub static STORAGE_DARK_MODE: &str = "darkMode";
pub static CLASS_DARK: &str = "dark";

pub static CSS_TOAST_BG: &str = "--toast-bg";
pub static CSS_TOAST_TEXT: &str = "--toast-text";
pub static TOAST_BG_DARK: &str = "#1F2937";
pub static TOAST_BG_LIGHT: &str = "#FFFFFF";
pub static TOAST_TEXT_DARK: &str = "#F9FAFB";
pub static TOAST_TEXT_LIGHT: &str = "#111827";

pub const TOAST_SUCCESS_MS: u32 = 2000;
pub const TOAST_ERROR_MS: u32 = 4000;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

pub static MSG_SERVER_ERROR: &str = "Server error";
pub static MSG_LOGIN_FAILED: &str = "Login failed";

pub static SHARE_INTENT: &str = "https://x.com/intent/tweet";
pub static SHARE_TEXT: &str = "Check out my outfit on StyleSwap!";

pub static APP_NAME: &str = "StyleSwap";
