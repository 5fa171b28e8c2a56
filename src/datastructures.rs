mod priority_map;

pub use priority_map::PriorityMap;
