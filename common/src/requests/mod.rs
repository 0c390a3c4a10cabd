use serde::Deserialize;

#[derive(Deserialize)]
/// Request payload for the confession submission endpoint.
/// Contains the free-form confession text, the only field a client sends.
pub struct Confession {
    pub text: String,
}
