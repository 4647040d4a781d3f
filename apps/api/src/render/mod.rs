// Server-rendered presentation layer: score gauges, the metrics bar chart,
// findings and suggestions. Rendering never touches the network or shared state.

pub mod chart;
pub mod escape;
pub mod page;

pub use page::{render_page, PageView};
