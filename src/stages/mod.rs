pub mod stage1_classify;
pub mod stage2_summarize;
pub mod stage3_diagram;

pub use stage1_classify::*;
pub use stage2_summarize::*;
pub use stage3_diagram::*;
