#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use trajviz_geometry as geometry;

#[doc(inline)]
pub use trajviz_plot as plot;
