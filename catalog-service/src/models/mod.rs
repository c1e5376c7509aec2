pub mod book;
pub mod form;
pub mod responses;
