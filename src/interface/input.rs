use glutin::event::VirtualKeyCode;

use crate::graphics::gl_types::PolygonMode;

/// What a key press means to the window loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Polygons(PolygonMode),
    /// Not a window-level key, so the running exercise gets to decide
    Forward(VirtualKeyCode),
}

pub fn command_for(key: VirtualKeyCode) -> Command {
    match key {
        VirtualKeyCode::Escape => Command::Close,
        VirtualKeyCode::W => Command::Polygons(PolygonMode::Line),
        VirtualKeyCode::F => Command::Polygons(PolygonMode::Fill),
        other => Command::Forward(other),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_keys() {
        assert_eq!(command_for(VirtualKeyCode::Escape), Command::Close);
        assert_eq!(command_for(VirtualKeyCode::W), Command::Polygons(PolygonMode::Line));
        assert_eq!(command_for(VirtualKeyCode::F), Command::Polygons(PolygonMode::Fill));
    }

    #[test]
    fn everything_else_is_forwarded() {
        assert_eq!(command_for(VirtualKeyCode::Up), Command::Forward(VirtualKeyCode::Up));
        assert_eq!(command_for(VirtualKeyCode::Q), Command::Forward(VirtualKeyCode::Q));
    }
}
