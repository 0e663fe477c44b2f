// Frame module: NDFrame, Series and DataFrame
// Author: Gabriel Demetrios Lafis

mod dataframe;
mod display;
mod ndframe;
mod series;

pub use dataframe::*;
pub use ndframe::*;
pub use series::*;
