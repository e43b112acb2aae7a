use serde::{Deserialize, Serialize};

fn default_grid_cells() -> usize {
    20
}

fn default_faded_cells() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WorksheetConfig {
    /// Total practice cells, reference cell included
    #[serde(default = "default_grid_cells")]
    pub grid_cells: usize,
    /// Traced cells following the reference cell
    #[serde(default = "default_faded_cells")]
    pub faded_cells: usize,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            grid_cells: default_grid_cells(),
            faded_cells: default_faded_cells(),
        }
    }
}
