pub mod normal_mode;
pub mod picker_mode;
