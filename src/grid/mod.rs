pub(crate) mod cells;
pub(crate) mod pan_zoom;
pub(crate) mod transform;
