//! Application Context
//!
//! The one page-lifetime owner of the config and the root component.

use std::rc::Rc;

use dom_component::Component;
use web_sys::Node;

use crate::components::TodoList;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::persistence::{KeyValueStore, LocalStorage, MemoryStore, TodoStorage};

pub struct AppContext {
    pub config: AppConfig,
    root: Component<TodoList>,
}

impl AppContext {
    pub fn new(config: AppConfig, backend: Rc<dyn KeyValueStore>) -> Self {
        let storage = TodoStorage::new(backend, config.storage_key.clone());
        let root = Component::new(TodoList::new(storage, &config));
        Self { config, root }
    }

    /// Context backed by local storage, or by page memory if it is blocked
    pub fn in_browser(config: AppConfig) -> Self {
        let backend: Rc<dyn KeyValueStore> = match LocalStorage::new() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                log::warn!("[APP] {}; todos will not survive a reload", err);
                Rc::new(MemoryStore::new())
            }
        };
        Self::new(config, backend)
    }

    pub fn root(&self) -> &Component<TodoList> {
        &self.root
    }

    /// Render the root component and append it to `parent`
    pub fn mount_into(&self, parent: &Node) -> Result<(), AppError> {
        let node = self.root.mount()?;
        parent.append_child(&node)?;
        Ok(())
    }

    /// Keep the context alive for the rest of the page's life
    pub fn leak(self) -> &'static AppContext {
        Box::leak(Box::new(self))
    }
}
