//! Pure widget logic for the ResaleX storefront.
//!
//! Everything here is DOM-free: price arithmetic, the suggestion catalog,
//! sort ordering, stepper clamping, filter matching, validation rules, and
//! the tagged UI states the WASM layer renders into classes and text.

pub mod filter;
pub mod money;
pub mod notify;
pub mod quantity;
pub mod sort;
pub mod suggest;
pub mod validate;
pub mod wishlist;
