//! Add Task Component
//!
//! Text input plus add button. Holds no state of its own: the input value
//! comes from the parent and every event is forwarded to it.

use std::rc::Rc;

use dom_component::{el, Render, Scope};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent};

pub type InputCallback = Rc<dyn Fn(String)>;
pub type AddCallback = Rc<dyn Fn()>;

pub struct AddTask {
    label_text: String,
    placeholder: String,
    add_label: String,
    on_input: InputCallback,
    on_add: AddCallback,
}

impl AddTask {
    pub fn new(
        label_text: impl Into<String>,
        placeholder: impl Into<String>,
        add_label: impl Into<String>,
        on_input: InputCallback,
        on_add: AddCallback,
    ) -> Self {
        Self {
            label_text: label_text.into(),
            placeholder: placeholder.into(),
            add_label: add_label.into(),
            on_input,
            on_add,
        }
    }
}

fn input_value(ev: &Event) -> Option<String> {
    let target = ev.target()?;
    let input = target.dyn_ref::<HtmlInputElement>()?;
    Some(input.value())
}

impl Render for AddTask {
    fn render(&mut self, _scope: &Scope<Self>) -> Result<Element, JsValue> {
        let on_input = self.on_input.clone();
        let on_enter = self.on_add.clone();
        let on_add = self.on_add.clone();

        let input = el("input")
            .attr("id", "new-todo")
            .attr("type", "text")
            .attr("placeholder", &self.placeholder)
            .attr("value", &self.label_text)
            .on("input", move |ev| {
                if let Some(value) = input_value(&ev) {
                    on_input(value);
                }
            })
            .on("keydown", move |ev| {
                let is_enter = ev
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Enter");
                if is_enter {
                    on_enter();
                }
            })
            .build()?;

        let button = el("button")
            .attr("id", "add-btn")
            .text(&self.add_label)
            .on("click", move |_| on_add())
            .build()?;

        el("div")
            .attr("class", "add-todo")
            .child(input)
            .child(button)
            .build()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use dom_component::Component;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    struct Recorded {
        inputs: Rc<RefCell<Vec<String>>>,
        adds: Rc<RefCell<u32>>,
    }

    fn add_task(label_text: &str) -> (Component<AddTask>, Recorded) {
        let inputs = Rc::new(RefCell::new(Vec::new()));
        let adds = Rc::new(RefCell::new(0));
        let (seen, count) = (inputs.clone(), adds.clone());
        let component = Component::new(AddTask::new(
            label_text,
            "Задание",
            "+",
            Rc::new(move |value| seen.borrow_mut().push(value)),
            Rc::new(move || *count.borrow_mut() += 1),
        ));
        (component, Recorded { inputs, adds })
    }

    fn input_of(node: &Element) -> HtmlInputElement {
        node.query_selector("#new-todo").unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_input_reflects_label_text() {
        let (component, _) = add_task("Buy milk");
        let node = component.mount().unwrap();

        let input = input_of(&node);
        assert_eq!(input.value(), "Buy milk");
        assert_eq!(input.placeholder(), "Задание");
    }

    #[wasm_bindgen_test]
    fn test_input_event_forwards_value() {
        let (component, recorded) = add_task("");
        let node = component.mount().unwrap();

        let input = input_of(&node);
        input.set_value("Walk dog");
        input.dispatch_event(&Event::new("input").unwrap()).unwrap();

        assert_eq!(*recorded.inputs.borrow(), vec!["Walk dog".to_string()]);
        assert_eq!(*recorded.adds.borrow(), 0);
    }

    #[wasm_bindgen_test]
    fn test_button_and_enter_forward_add() {
        let (component, recorded) = add_task("x");
        let node = component.mount().unwrap();

        let button: HtmlElement = node.query_selector("#add-btn").unwrap().unwrap().dyn_into().unwrap();
        button.click();

        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        let enter = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        input_of(&node).dispatch_event(&enter).unwrap();

        assert_eq!(*recorded.adds.borrow(), 2);
    }
}
