//! DOM Component Utilities
//!
//! Element construction and a render/update component base for
//! hand-built DOM trees. There is no diffing: an update rebuilds the
//! component's whole subtree and swaps it in place of the old node.

mod component;
mod element;

pub use component::{Component, Render, Scope};
pub use element::{create_element, document, el, Child, Children, ElementBuilder, Listener};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
