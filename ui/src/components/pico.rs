//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure pico.min.css is linked in the main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

/// Pico class list for a button style.
fn button_class(button_type: ButtonType, outline: bool) -> String {
    match (outline, button_type.to_class()) {
        (true, "") => "outline".to_string(),
        (true, class) => format!("{class} outline"),
        (false, class) => class.to_string(),
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Submits the enclosing form instead of acting on its own.
    #[props(default = false)]
    submit: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = button_class(props.button_type, props.outline);
    rsx! {
        button {
            r#type: if props.submit { "submit" } else { "button" },
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    /// Shown under the field, which is then marked invalid.
    #[props(default)]
    error: Option<String>,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled form input field.
pub fn Input(props: InputProps) -> Element {
    let helper_id = format!("{}-helper", props.name);
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                disabled: props.disabled,
                "aria-invalid": if props.error.is_some() { "true" },
                "aria-describedby": if props.error.is_some() { "{helper_id}" },
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            if let Some(error) = &props.error {
                small { id: "{helper_id}", "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

/// A dialog with a title bar. Closes on the close link or Escape.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            rel: "prev",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            },
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_classes_follow_pico_names() {
        assert_eq!(button_class(ButtonType::Primary, false), "");
        assert_eq!(button_class(ButtonType::Primary, true), "outline");
        assert_eq!(button_class(ButtonType::Secondary, false), "secondary");
        assert_eq!(button_class(ButtonType::Secondary, true), "secondary outline");
    }
}
