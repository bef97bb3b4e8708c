pub mod alert;
pub mod pagination;
pub mod statusbar;
