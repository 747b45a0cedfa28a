pub mod entities;
pub mod posting;
