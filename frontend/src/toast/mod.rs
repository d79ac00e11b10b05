pub mod toasts;
