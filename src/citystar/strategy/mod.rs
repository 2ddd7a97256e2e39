mod strategy;
mod astar;
mod insertion;


pub use strategy::{Strategy, Tour};
pub use astar::AStar;
pub use insertion::InsertionOrder;
