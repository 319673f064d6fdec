//! Component Base
//!
//! A component owns its state and a render function producing a fresh
//! element. `mount` renders and caches the node; `update` renders again and
//! swaps the new node in where the cached one sits, if it is attached.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;
use web_sys::Element;

/// State that knows how to render itself
pub trait Render: Sized + 'static {
    /// Build a new element tree from the current state.
    ///
    /// `scope` is the handle event listeners use to reach this component.
    fn render(&mut self, scope: &Scope<Self>) -> Result<Element, JsValue>;
}

struct Inner<R> {
    state: RefCell<R>,
    node: RefCell<Option<Element>>,
}

/// Shared handle to a component and its currently displayed node
pub struct Component<R: Render> {
    inner: Rc<Inner<R>>,
}

impl<R: Render> Clone for Component<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Render> Component<R> {
    pub fn new(state: R) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                node: RefCell::new(None),
            }),
        }
    }

    /// Weak handle for event listeners
    pub fn scope(&self) -> Scope<R> {
        Scope {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Render and remember the result as the displayed node
    pub fn mount(&self) -> Result<Element, JsValue> {
        let node = self.render()?;
        *self.inner.node.borrow_mut() = Some(node.clone());
        Ok(node)
    }

    /// Re-render and replace the displayed node in its parent.
    ///
    /// A detached (or never mounted) node is only swapped in the cache.
    pub fn update(&self) -> Result<(), JsValue> {
        let new_node = self.render()?;
        let old_node = self.inner.node.borrow().clone();

        if let Some(old_node) = old_node {
            if let Some(parent) = old_node.parent_node() {
                parent.replace_child(&new_node, &old_node)?;
            }
        }

        *self.inner.node.borrow_mut() = Some(new_node);
        Ok(())
    }

    /// Currently displayed node, if mounted
    pub fn node(&self) -> Option<Element> {
        self.inner.node.borrow().clone()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    fn render(&self) -> Result<Element, JsValue> {
        let scope = self.scope();
        let mut state = self
            .inner
            .state
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("component is already rendering"))?;
        state.render(&scope)
    }
}

/// Weak handle to a component.
///
/// Listeners hold a `Scope` instead of a `Component`, so a subtree that a
/// parent has replaced does not keep its component alive. Calls on a scope
/// whose component is gone do nothing.
pub struct Scope<R> {
    inner: Weak<Inner<R>>,
}

impl<R> Clone for Scope<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Render> Scope<R> {
    pub fn component(&self) -> Option<Component<R>> {
        self.inner.upgrade().map(|inner| Component { inner })
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&R) -> T) -> Option<T> {
        self.component().map(|component| component.with_state(f))
    }

    /// Mutate state, then update if `f` reports a change
    pub fn update_with(&self, f: impl FnOnce(&mut R) -> bool) -> Result<(), JsValue> {
        let Some(component) = self.component() else {
            return Ok(());
        };

        let changed = {
            let mut state = component
                .inner
                .state
                .try_borrow_mut()
                .map_err(|_| JsValue::from_str("component is already rendering"))?;
            f(&mut state)
        };

        if changed {
            component.update()?;
        }
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::el;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, Node};

    fn same(a: &Node, b: &Node) -> bool {
        a.is_same_node(Some(b))
    }

    struct Counter {
        count: u32,
        renders: u32,
    }

    impl Render for Counter {
        fn render(&mut self, scope: &Scope<Self>) -> Result<Element, JsValue> {
            self.renders += 1;
            let scope = scope.clone();
            el("button")
                .text(&self.count.to_string())
                .on("click", move |_| {
                    let _ = scope.update_with(|counter| {
                        counter.count += 1;
                        true
                    });
                })
                .build()
        }
    }

    fn counter() -> Component<Counter> {
        Component::new(Counter { count: 0, renders: 0 })
    }

    #[wasm_bindgen_test]
    fn test_mount_caches_node() {
        let component = counter();
        let node = component.mount().unwrap();

        assert!(same(&component.node().unwrap(), &node));
        assert_eq!(component.with_state(|c| c.renders), 1);
    }

    #[wasm_bindgen_test]
    fn test_update_replaces_attached_node_in_place() {
        let parent = el("div").build().unwrap();
        let before = el("span").build().unwrap();
        let after = el("span").build().unwrap();
        let component = counter();

        parent.append_child(&before).unwrap();
        parent.append_child(&component.mount().unwrap()).unwrap();
        parent.append_child(&after).unwrap();

        let old = component.node().unwrap();
        old.dyn_ref::<HtmlElement>().unwrap().click();

        let new = component.node().unwrap();
        assert!(!same(&new, &old));
        assert!(old.parent_node().is_none());
        assert_eq!(parent.child_nodes().length(), 3);
        assert!(same(&parent.child_nodes().get(1).unwrap(), &new));
        assert_eq!(new.text_content().as_deref(), Some("1"));
    }

    #[wasm_bindgen_test]
    fn test_update_of_detached_node_only_caches() {
        let component = counter();
        component.mount().unwrap();

        component.update().unwrap();

        let node = component.node().unwrap();
        assert!(node.parent_node().is_none());
        assert_eq!(component.with_state(|c| c.renders), 2);
    }

    #[wasm_bindgen_test]
    fn test_update_before_mount_caches_node() {
        let component = counter();

        component.update().unwrap();

        assert!(component.node().is_some());
    }

    #[wasm_bindgen_test]
    fn test_unchanged_state_skips_render() {
        let component = counter();
        component.mount().unwrap();

        component.scope().update_with(|_| false).unwrap();

        assert_eq!(component.with_state(|c| c.renders), 1);
    }

    #[wasm_bindgen_test]
    fn test_scope_of_dropped_component_is_inert() {
        let component = counter();
        let scope = component.scope();
        drop(component);

        assert!(scope.component().is_none());
        assert!(scope.update_with(|_| true).is_ok());
        assert_eq!(scope.with_state(|c| c.count), None);
    }
}
