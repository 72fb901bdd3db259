mod checkbox;
mod slider;

pub use checkbox::CheckboxWidget;
pub use slider::SliderWidget;
