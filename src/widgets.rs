use crate::logic::Counter;
use crate::models::{CardKeyResponse, LoaderView, ModalView, StateResponse};
use std::collections::BTreeSet;

/// Marker class names shared with the page stylesheet.
pub const ACTIVE: &str = "active";
pub const FLIPPED: &str = "flipped";
pub const SLIDE_IN: &str = "slide-in";

/// Focus targets reported by the modal, as element ids on the page.
pub const MODAL_CONTENT_ID: &str = "modalContent";
pub const SHOW_MODAL_BTN_ID: &str = "showModalBtn";

/// A set of marker classes on one element. Presence of a class is the only
/// state; visibility and accessibility flags are derived from it.
#[derive(Debug, Clone, Default)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    /// Inverts presence of `class` and returns whether it is now present.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Space-joined class list, as it would appear in a class attribute.
    pub fn to_attr(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Modal {
    classes: ClassSet,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.classes.contains(ACTIVE)
    }

    pub fn aria_hidden(&self) -> bool {
        !self.is_open()
    }

    /// Marks the dialog visible and directs focus into its content.
    pub fn open(&mut self) -> ModalView {
        self.classes.add(ACTIVE);
        self.view(Some(MODAL_CONTENT_ID))
    }

    /// Marks the dialog hidden and returns focus to the triggering control.
    pub fn close(&mut self) -> ModalView {
        self.classes.remove(ACTIVE);
        self.view(Some(SHOW_MODAL_BTN_ID))
    }

    pub fn view(&self, focus: Option<&str>) -> ModalView {
        ModalView {
            open: self.is_open(),
            aria_hidden: self.aria_hidden(),
            focus: focus.map(str::to_string),
        }
    }

    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }
}

#[derive(Debug, Clone, Default)]
pub struct Loader {
    classes: ClassSet,
}

impl Loader {
    pub fn is_active(&self) -> bool {
        self.classes.contains(ACTIVE)
    }

    /// Inverts the visibility marker; the accessibility flag follows it.
    pub fn toggle(&mut self) -> LoaderView {
        self.classes.toggle(ACTIVE);
        self.view()
    }

    pub fn view(&self) -> LoaderView {
        LoaderView {
            active: self.is_active(),
            aria_hidden: !self.is_active(),
        }
    }

    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }
}

#[derive(Debug, Clone, Default)]
pub struct Card {
    classes: ClassSet,
}

impl Card {
    pub fn is_flipped(&self) -> bool {
        self.classes.contains(FLIPPED)
    }

    pub fn flip(&mut self) -> bool {
        self.classes.toggle(FLIPPED)
    }

    /// Keyboard activation: Enter and Space flip the card and require the
    /// default action to be suppressed; any other key leaves it unchanged.
    pub fn handle_key(&mut self, key: &str) -> CardKeyResponse {
        let activates = key == "Enter" || key == " ";
        if activates {
            self.flip();
        }
        CardKeyResponse {
            flipped: self.is_flipped(),
            default_prevented: activates,
        }
    }

    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }
}

/// All demo state behind the page: the counter plus each widget's markers.
#[derive(Debug, Clone, Default)]
pub struct DemoState {
    pub counter: Counter,
    box_classes: ClassSet,
    greeting_classes: ClassSet,
    counter_classes: ClassSet,
    pub card: Card,
    pub loader: Loader,
    pub modal: Modal,
}

impl DemoState {
    /// Looks up the class set for a registered element id. The ids mirror the
    /// page markup; anything else is rejected by the caller.
    pub fn class_set_mut(&mut self, element: &str) -> Option<&mut ClassSet> {
        match element {
            "box" => Some(&mut self.box_classes),
            "card" => Some(self.card.classes_mut()),
            "loader" => Some(self.loader.classes_mut()),
            "modal" => Some(self.modal.classes_mut()),
            "greetingMessage" => Some(&mut self.greeting_classes),
            "counterValue" => Some(&mut self.counter_classes),
            _ => None,
        }
    }

    pub fn box_classes(&self) -> &ClassSet {
        &self.box_classes
    }

    pub fn snapshot(&self) -> StateResponse {
        StateResponse {
            count: self.counter.value(),
            box_slid: self.box_classes.contains(SLIDE_IN),
            card_flipped: self.card.is_flipped(),
            loader_active: self.loader.is_active(),
            modal_open: self.modal.is_open(),
        }
    }
}
