//! Classroom Admin - Leptos Frontend Library

pub mod api;
pub mod app;
pub mod components;
pub mod interaction;
pub mod pages;
