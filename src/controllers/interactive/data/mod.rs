pub mod frame_data;
pub mod status;
