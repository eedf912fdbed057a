pub mod bindings;
pub mod help_overlay;
