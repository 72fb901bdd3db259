mod playground;

pub use playground::PlaygroundPane;
