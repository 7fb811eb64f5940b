pub mod flappy_scene;
pub mod game_common;

use crate::game::FlappyGame;
use ratatui::Frame;

/// Main UI drawing function. Reads the game, never mutates it.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    let size = frame.size();
    flappy_scene::render_flappy(frame, size, game);
}
