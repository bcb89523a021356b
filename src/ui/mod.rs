//! UI module exports

pub mod components;
pub mod form;

pub use form::{App, AppProps};
