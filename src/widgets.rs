//! Small layout helpers shared by the renderers

pub mod popup;
