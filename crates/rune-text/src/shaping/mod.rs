pub mod shaped_run;
pub mod shaper;

pub use shaped_run::ShapedRun;
pub use shaper::TextShaper;
