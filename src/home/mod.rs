mod components;

pub use components::Home;
