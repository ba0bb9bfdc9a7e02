use crate::controllers::interactive::events::render::RenderEvent;

pub trait ScenePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
