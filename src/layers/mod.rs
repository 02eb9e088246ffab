pub mod manager;
pub mod marker;
pub mod vector;
