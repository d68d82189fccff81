/// Edge weight type (travel time in minutes)
pub type Weight = f64;
