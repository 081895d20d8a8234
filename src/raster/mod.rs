pub(crate) mod coords;
pub(crate) mod line;
