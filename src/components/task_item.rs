//! Task Item Component
//!
//! One list entry: completion checkbox, label, and a delete button that
//! needs two clicks. The first click only arms the button; the second asks
//! the parent to delete the entry.

use std::rc::Rc;

use dom_component::{el, Render, Scope};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement};

use crate::models::TodoItem;

pub type DeleteCallback = Rc<dyn Fn(usize)>;
pub type ToggleCallback = Rc<dyn Fn(usize, bool)>;

const COMPLETED_LABEL_STYLE: &str = "color: gray;";
const CONFIRM_DELETE_STYLE: &str = "background: red; color: white;";

pub struct TaskItem {
    todo: TodoItem,
    index: usize,
    delete_label: String,
    on_delete: DeleteCallback,
    on_toggle: ToggleCallback,
    /// Set by the first delete click; never cleared on this instance
    confirm_delete: bool,
}

impl TaskItem {
    pub fn new(
        todo: TodoItem,
        index: usize,
        delete_label: impl Into<String>,
        on_delete: DeleteCallback,
        on_toggle: ToggleCallback,
    ) -> Self {
        Self {
            todo,
            index,
            delete_label: delete_label.into(),
            on_delete,
            on_toggle,
            confirm_delete: false,
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm_delete
    }
}

fn handle_delete_click(scope: &Scope<TaskItem>, on_delete: &DeleteCallback, index: usize) {
    let confirming = scope.with_state(TaskItem::is_confirming).unwrap_or(false);
    if confirming {
        on_delete(index);
        return;
    }

    let armed = scope.update_with(|task| {
        task.confirm_delete = true;
        true
    });
    if let Err(err) = armed {
        log::error!("[TASK] Failed to re-render item {}: {:?}", index, err);
    }
}

impl Render for TaskItem {
    fn render(&mut self, scope: &Scope<Self>) -> Result<Element, JsValue> {
        let index = self.index;
        let completed = self.todo.is_completed();

        let on_toggle = self.on_toggle.clone();
        let checkbox = el("input")
            .attr("type", "checkbox")
            .attr_opt("checked", completed.then_some(""))
            .on("change", move |ev| {
                let checked = ev
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                    .is_some_and(|input| input.checked());
                on_toggle(index, checked);
            })
            .build()?;

        let label = el("label")
            .attr("style", if completed { COMPLETED_LABEL_STYLE } else { "" })
            .text(&self.todo.label)
            .build()?;

        let scope = scope.clone();
        let on_delete = self.on_delete.clone();
        let button = el("button")
            .attr("class", "delete-btn")
            .attr("style", if self.confirm_delete { CONFIRM_DELETE_STYLE } else { "" })
            .text(&self.delete_label)
            .on("click", move |_| handle_delete_click(&scope, &on_delete, index))
            .build()?;

        el("li").child(checkbox).child(label).child(button).build()
    }
}
