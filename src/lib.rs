//! Client-side state and data sync for a social forum.
//!
//! Gateways talk to the remote services, action creators package results,
//! reducers fold them into an immutable [`AppState`](state::AppState) held
//! by a [`Store`](store::Store), and selectors read it back out.

pub mod api;
pub mod config;
pub mod controllers;
pub mod forum;
pub mod lifetime;
pub mod logging;
pub mod mvi;
pub mod selectors;
pub mod state;
pub mod store;
pub mod validation;

pub use forum::Forum;
