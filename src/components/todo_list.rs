//! Todo List Component
//!
//! Root component. Owns the entries and the pending input text, builds a
//! fresh task component per entry on every render, and saves the list to
//! storage each time it renders.

use std::rc::Rc;

use dom_component::{el, Child, Component, Render, Scope};
use wasm_bindgen::JsValue;
use web_sys::Element;

use super::add_task::AddTask;
use super::task_item::TaskItem;
use crate::config::AppConfig;
use crate::persistence::TodoStorage;
use crate::store::TodoState;

pub struct TodoList {
    state: TodoState,
    storage: TodoStorage,
    title: String,
    placeholder: String,
    add_label: String,
    delete_label: String,
    /// Children from the latest render; replaced wholesale on the next one
    tasks: Vec<Component<TaskItem>>,
    add_task: Option<Component<AddTask>>,
}

impl TodoList {
    /// Create the list with whatever the storage currently holds
    pub fn new(storage: TodoStorage, config: &AppConfig) -> Self {
        let todos = storage.load();
        log::info!("[LIST] Loaded {} todos from '{}'", todos.len(), storage.key());
        Self {
            state: TodoState::new(todos),
            storage,
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            add_label: config.add_label.clone(),
            delete_label: config.delete_label.clone(),
            tasks: Vec::new(),
            add_task: None,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Task components from the latest render
    pub fn tasks(&self) -> &[Component<TaskItem>] {
        &self.tasks
    }
}

fn report(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        log::error!("[LIST] {} failed: {:?}", action, err);
    }
}

impl Render for TodoList {
    fn render(&mut self, scope: &Scope<Self>) -> Result<Element, JsValue> {
        if let Err(err) = self.storage.save(&self.state.todos) {
            log::warn!("[LIST] Could not save todos: {}", err);
        }

        let on_delete = {
            let scope = scope.clone();
            Rc::new(move |index: usize| {
                log::debug!("[LIST] Delete #{}", index);
                report(scope.update_with(|list| list.state.delete(index)), "delete");
            })
        };
        let on_toggle = {
            let scope = scope.clone();
            Rc::new(move |index: usize, checked: bool| {
                log::debug!("[LIST] Toggle #{} -> {}", index, checked);
                report(
                    scope.update_with(|list| list.state.toggle(index, checked)),
                    "toggle",
                );
            })
        };

        self.tasks = self
            .state
            .todos
            .iter()
            .enumerate()
            .map(|(index, todo)| {
                Component::new(TaskItem::new(
                    todo.clone(),
                    index,
                    self.delete_label.as_str(),
                    on_delete.clone(),
                    on_toggle.clone(),
                ))
            })
            .collect();

        let task_nodes = self
            .tasks
            .iter()
            .map(|task| task.mount().map(Child::from))
            .collect::<Result<Vec<_>, _>>()?;

        let on_input = {
            let scope = scope.clone();
            Rc::new(move |text: String| {
                report(
                    scope.update_with(|list| {
                        list.state.set_label_text(text);
                        false
                    }),
                    "input",
                );
            })
        };
        let on_add = {
            let scope = scope.clone();
            Rc::new(move || report(scope.update_with(|list| list.state.add()), "add"))
        };

        let add_task = Component::new(AddTask::new(
            self.state.label_text.as_str(),
            self.placeholder.as_str(),
            self.add_label.as_str(),
            on_input,
            on_add,
        ));
        let add_node = add_task.mount()?;
        self.add_task = Some(add_task);

        let count = format!("{} items left", self.state.remaining());

        el("div")
            .attr("class", "todo-list")
            .child(el("h1").text(&self.title).build()?)
            .child(add_node)
            .child(el("ul").attr("id", "todos").children(task_nodes).build()?)
            .child(el("p").attr("class", "todo-count").text(&count).build()?)
            .build()
    }
}
