// Adapters layer: concrete implementations of the domain ports for external services.

pub mod openai;
