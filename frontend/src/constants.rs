pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_SELECTED: &'static str = "selected";
pub static PROP_ACCEPT: &'static str = "accept";
pub static PROP_SRC: &'static str = "src";
pub static PROP_ALT: &'static str = "alt";
pub static PROP_HREF: &'static str = "href";
pub static PROP_ARIA_LABEL: &'static str = "aria-label";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_OPTION: &'static str = "option";
pub static TAG_IMG: &'static str = "img";
pub static TAG_NAV: &'static str = "nav";
pub static TAG_P: &'static str = "p";

pub static ACCEPT_IMAGES: &'static str = "image/png,image/jpeg";
