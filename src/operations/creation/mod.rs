mod make_maze_solid;
mod make_nubs;
mod make_park_ridge;

pub use make_maze_solid::MakeMazeSolid;
pub use make_nubs::{MakeNubs, NubAngle, NubParams, NubSolid};
pub use make_park_ridge::MakeParkRidge;
