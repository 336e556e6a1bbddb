pub mod charts;
pub mod dialog;
pub mod footer;
pub mod form;
pub mod icons;
pub mod layout;
pub mod navbar;
