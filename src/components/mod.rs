//! UI Components
//!
//! Render/update components built on `dom-component`.

mod add_task;
mod task_item;
mod todo_list;

pub use add_task::AddTask;
pub use task_item::TaskItem;
pub use todo_list::TodoList;
