use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SumRequest {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: f64,
}

#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub message: String,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ClassToggleRequest {
    pub element: String,
    pub class: String,
}

#[derive(Debug, Serialize)]
pub struct ClassToggleResponse {
    pub element: String,
    pub class: String,
    pub present: bool,
}

#[derive(Debug, Deserialize)]
pub struct CardKeyRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct CardKeyResponse {
    pub flipped: bool,
    pub default_prevented: bool,
}

#[derive(Debug, Serialize)]
pub struct CardView {
    pub flipped: bool,
}

#[derive(Debug, Serialize)]
pub struct LoaderView {
    pub active: bool,
    pub aria_hidden: bool,
}

#[derive(Debug, Serialize)]
pub struct ModalView {
    pub open: bool,
    pub aria_hidden: bool,
    /// Element id that should receive keyboard focus after the transition.
    pub focus: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub count: u64,
    pub box_slid: bool,
    pub card_flipped: bool,
    pub loader_active: bool,
    pub modal_open: bool,
}
