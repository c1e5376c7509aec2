pub mod book;
pub mod command;
pub mod form;
pub mod view;
