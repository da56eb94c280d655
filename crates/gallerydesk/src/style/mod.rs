//! Visual styling for the admin console.

pub mod widgets;
