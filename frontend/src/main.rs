use crate::elements::app_root::app_root;
use crate::state::AppState;

mod elements;
mod utils;
mod constants;
mod state;
mod session;
mod theme;
mod toast;
mod types;
mod connect_fetch;
mod connect_files;
pub mod loader;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    let app = AppState::new();
    dominator::append_dom(&dominator::body(), app_root(app));
}
