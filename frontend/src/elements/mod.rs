pub mod app_header;
pub mod app_home;
pub mod app_login;
pub mod app_outfit;
pub mod app_outfits;
pub mod app_profile;
pub mod app_root;
pub mod app_signup;
pub mod outfit_form;
pub mod widgets;
