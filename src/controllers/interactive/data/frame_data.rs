use std::time::Duration;

use crate::controllers::interactive::data::status::Status;
use crate::core::data::scene::Scene;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub scene: Scene,
    pub status: Status,
    pub build_duration: Duration,
}
