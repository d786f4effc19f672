pub mod frame_settings;
pub mod sketch_settings;
