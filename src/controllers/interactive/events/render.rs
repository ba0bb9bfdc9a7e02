use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::status::Status;
use crate::controllers::interactive::errors::render::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    /// A complete scene, to be swapped in as a whole.
    Frame(FrameData),
    /// Status changed without a new scene, e.g. FPS cleared on stop.
    Status(Status),
    Error(RenderError),
}
