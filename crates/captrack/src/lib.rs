#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use captrack_align as align;

#[doc(inline)]
pub use captrack_geometry as geometry;

#[doc(inline)]
pub use captrack_layout as layout;

#[doc(inline)]
pub use captrack_scene as scene;
