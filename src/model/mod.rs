pub use clonesim_core::CellLogic;
pub mod config {
    pub use clonesim_core::config::*;
}
pub mod lifecycle {
    pub use clonesim_core::lifecycle::*;
}
pub mod population {
    pub use clonesim_core::population::*;
}
pub mod stats {
    pub use clonesim_core::stats::*;
}
pub mod metrics {
    pub use clonesim_core::metrics::*;
}

pub mod state {
    pub use clonesim_data::*;
}
