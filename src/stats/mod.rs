mod components;

pub use components::Stats;
