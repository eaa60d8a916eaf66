//! Request middleware: the bearer-token auth extractor.

pub mod auth;
