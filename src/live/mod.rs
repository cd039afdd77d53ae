mod components;
mod status;

pub use components::LiveStatusBanner;
