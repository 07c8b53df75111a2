/// Widgets the host can show and hide.
pub trait Hideable {
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn show(&mut self) {
        self.set_visible(true);
    }

    fn hide(&mut self) {
        self.set_visible(false);
    }

    fn toggle_visibility(&mut self) {
        let visible = self.is_visible();
        self.set_visible(!visible);
    }
}
