//! Map view helpers
//!
//! Chooses which boundaries to draw for a selection, at what zoom, and how
//! to bin indicator values into a choropleth legend. Rendering itself is
//! left to the presentation layer.

pub mod bins;
pub mod layer;
pub mod view;

pub use bins::choropleth_bins;
pub use layer::MapLayer;
pub use view::{MapScope, MapView, zoom_for};
