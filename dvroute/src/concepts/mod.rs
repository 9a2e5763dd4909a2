pub mod neighbour;
pub mod route;
pub mod table;
