pub mod use_copy_to_clipboard;
pub mod use_toasts;
