// Presentation layer
// Handlers build view models; the renderer prints them as JSON or through
// their plain-text views.

mod renderer;
pub mod view_models;
pub mod views;

pub use renderer::ConsoleRenderer;
pub use view_models::{
    CommandResultViewModel, CreateView, HighlightListViewModel, InitViewModel,
    ScanOutputViewModel, SummaryViewModel,
};
