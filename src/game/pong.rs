// The match: two paddles, one ball, scores and the menu overlay

use glam::Vec2;
use log::{debug, info};

use super::ball::Ball;
use super::config::GameConfig;
use super::paddle::Paddle;
use super::state::GameState;
use crate::core::Color;
use crate::engine::input::{key_label, InputConfig, KeySource};
use crate::engine::renderer::Canvas;

/// Which paddle a bounce came off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Owns every entity and advances the whole match once per frame
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    bindings: InputConfig,
    left_paddle: Paddle,
    right_paddle: Paddle,
    ball: Ball,
    score_left: u32,
    score_right: u32,
    state: GameState,
}

impl Game {
    /// Set up a fresh match, paused on the menu
    pub fn new(config: GameConfig, bindings: InputConfig) -> Self {
        Self {
            left_paddle: Paddle::new(
                config.left_paddle_start(),
                config.paddle_size,
                bindings.left,
                config.paddle_speed,
            ),
            right_paddle: Paddle::new(
                config.right_paddle_start(),
                config.paddle_size,
                bindings.right,
                config.paddle_speed,
            ),
            ball: Ball::new(
                config.ball_start(),
                config.ball_start_velocity(),
                config.ball_radius,
            ),
            score_left: 0,
            score_right: 0,
            state: GameState::default(),
            config,
            bindings,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Scores as (left, right)
    pub fn scores(&self) -> (u32, u32) {
        (self.score_left, self.score_right)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Advance one frame
    ///
    /// Paddle contact and scoring are judged on where the ball was at the
    /// end of the previous frame, before this frame moves it.
    pub fn update(&mut self, keys: &impl KeySource, dt: f32, screen: Vec2) {
        let ball_position = self.ball.position();
        let ball_velocity = self.ball.velocity();

        // Only bounce a ball that is heading into the paddle
        if ball_velocity.x < 0.0 && self.ball.touches(&self.left_paddle.rect()) {
            self.bounce(Side::Left);
        }
        if ball_velocity.x > 0.0 && self.ball.touches(&self.right_paddle.rect()) {
            self.bounce(Side::Right);
        }

        if ball_position.x > screen.x {
            self.score_left += 1;
            info!("Left scores ({} : {})", self.score_left, self.score_right);
            self.reset_ball();
        }
        if ball_position.x < 0.0 {
            self.score_right += 1;
            info!("Right scores ({} : {})", self.score_left, self.score_right);
            self.reset_ball();
        }

        match self.state {
            GameState::Playing => {
                self.ball.update(dt, screen.y);
                self.left_paddle.update(keys, dt, screen.y);
                self.right_paddle.update(keys, dt, screen.y);
            }
            GameState::Menu => {
                if keys.was_pressed(self.bindings.restart) {
                    self.restart();
                }
            }
        }

        if keys.was_pressed(self.bindings.toggle_menu) {
            self.state = self.state.toggled();
            info!("State changed to {:?}", self.state);
        }
    }

    /// Draw the current frame
    pub fn draw(&self, canvas: &mut impl Canvas, screen: Vec2) {
        canvas.clear(Color::BLACK);

        let center = screen / 2.0;
        let font_size = self.config.font_size;

        match self.state {
            GameState::Playing => {
                self.ball.draw(canvas);
                self.left_paddle.draw(canvas);
                self.right_paddle.draw(canvas);

                canvas.draw_text(
                    &format!("{} : {}", self.score_left, self.score_right),
                    center,
                    font_size,
                    Color::LIGHT_GRAY,
                );
                // Speed after this frame's bounce, not the one the frame started with
                canvas.draw_text(
                    &format!("{:.2}", self.ball.velocity().x),
                    center - Vec2::new(100.0, 100.0),
                    font_size,
                    Color::LIGHT_GRAY,
                );
            }
            GameState::Menu => {
                canvas.draw_text(
                    &format!("Press {} to continue", key_label(self.bindings.toggle_menu)),
                    center - Vec2::new(200.0, 0.0),
                    font_size,
                    Color::LIGHT_GRAY,
                );
                canvas.draw_text(
                    &format!("Press {} to restart", key_label(self.bindings.restart)),
                    center - Vec2::new(200.0, 100.0),
                    font_size,
                    Color::LIGHT_GRAY,
                );
            }
        }
    }

    /// Send the ball back off a paddle, faster, with English from the hit offset
    fn bounce(&mut self, side: Side) {
        let paddle = match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        };
        let half_height = paddle.size().y / 2.0;
        let paddle_center = paddle.position().y + half_height;

        let velocity = self.ball.velocity();
        let offset = (self.ball.position().y - paddle_center) / half_height;
        // English is mirrored on the right paddle
        let english = match side {
            Side::Left => offset,
            Side::Right => -offset,
        };
        let new_velocity = Vec2::new(
            -velocity.x * self.config.bounce_speedup,
            english * velocity.x.abs(),
        );

        debug!(
            "{:?} paddle hit at offset {:.2}, ball speed now {:.1}",
            side,
            offset,
            new_velocity.x.abs()
        );
        // TODO: cap the ball speed; repeated rallies grow it without bound
        self.ball.set_velocity(new_velocity);
    }

    /// Put the ball back on the center spot with the serve velocity
    fn reset_ball(&mut self) {
        // Paddles keep their positions across points
        // TODO: randomize the serve direction
        self.ball.set_position(self.config.ball_start());
        self.ball.set_velocity(self.config.ball_start_velocity());
    }

    /// Clear the scores and re-serve
    fn restart(&mut self) {
        self.score_left = 0;
        self.score_right = 0;
        self.reset_ball();
        info!("Match restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::KeyboardState;
    use crate::game::testing::{DrawCall, RecordingCanvas};
    use approx::assert_relative_eq;
    use winit::keyboard::KeyCode;

    const SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);
    const FRAME: f32 = 1.0 / 60.0;

    fn new_game() -> Game {
        Game::new(GameConfig::default(), InputConfig::default())
    }

    fn playing_game() -> Game {
        let mut game = new_game();
        game.state = GameState::Playing;
        game
    }

    fn press(key: KeyCode) -> KeyboardState {
        let mut keys = KeyboardState::new();
        keys.press(key);
        keys
    }

    fn place_ball(game: &mut Game, position: Vec2, velocity: Vec2) {
        game.ball.set_position(position);
        game.ball.set_velocity(velocity);
    }

    #[test]
    fn test_new_game_starts_in_menu() {
        let game = new_game();
        assert_eq!(game.state(), GameState::Menu);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));
        assert_eq!(game.ball().velocity(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_left_paddle_bounce_reverses_and_speeds_up() {
        let mut game = playing_game();
        // Paddle spans x 50..70, y 415..665; center at y = 540
        place_ball(&mut game, Vec2::new(75.0, 540.0), Vec2::new(-600.0, 100.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        let velocity = game.ball().velocity();
        assert!(velocity.x > 0.0);
        assert_relative_eq!(velocity.x, 660.0, epsilon = 1e-3);
        // Dead-center hit leaves no vertical speed
        assert_relative_eq!(velocity.y, 0.0);
    }

    #[test]
    fn test_left_paddle_english_scales_with_offset() {
        let mut game = playing_game();
        // Half way from the center to the bottom edge of the paddle
        place_ball(&mut game, Vec2::new(75.0, 602.5), Vec2::new(-600.0, 0.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        let velocity = game.ball().velocity();
        assert_relative_eq!(velocity.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_right_paddle_bounce_mirrors_left() {
        let mut game = playing_game();
        // Right paddle spans x 1850..1870, y 415..665
        place_ball(&mut game, Vec2::new(1845.0, 477.5), Vec2::new(600.0, 0.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        let velocity = game.ball().velocity();
        assert_relative_eq!(velocity.x, -660.0, epsilon = 1e-3);
        // English is flipped on the right: above center sends the ball down
        assert_relative_eq!(velocity.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_right_paddle_english_below_center() {
        let mut game = playing_game();
        // Half way from the center to the bottom edge of the right paddle
        place_ball(&mut game, Vec2::new(1845.0, 602.5), Vec2::new(600.0, 0.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        let velocity = game.ball().velocity();
        assert_relative_eq!(velocity.x, -660.0, epsilon = 1e-3);
        assert_relative_eq!(velocity.y, -300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_receding_ball_is_not_bounced_again() {
        let mut game = playing_game();
        place_ball(&mut game, Vec2::new(75.0, 540.0), Vec2::new(660.0, 0.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        assert_eq!(game.ball().velocity(), Vec2::new(660.0, 0.0));
    }

    #[test]
    fn test_repeated_bounces_keep_speeding_up() {
        let mut game = playing_game();
        let mut speed = 500.0_f32;

        for _ in 0..5 {
            place_ball(&mut game, Vec2::new(75.0, 540.0), Vec2::new(-speed, 0.0));
            game.update(&KeyboardState::new(), 0.0, SCREEN);
            let next = game.ball().velocity().x;
            assert_relative_eq!(next, speed * 1.1, max_relative = 1e-5);
            speed = next;
        }
        assert!(speed > 800.0);
    }

    #[test]
    fn test_collision_uses_previous_frame_position() {
        let mut game = playing_game();
        // Touching now, but this frame's move would carry it well clear
        place_ball(&mut game, Vec2::new(75.0, 540.0), Vec2::new(-600.0, 0.0));

        game.update(&KeyboardState::new(), 1.0, SCREEN);

        assert!(game.ball().velocity().x > 0.0);
    }

    #[test]
    fn test_ball_past_right_edge_scores_left() {
        let mut game = playing_game();
        place_ball(&mut game, Vec2::new(1921.0, 300.0), Vec2::new(900.0, -40.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        assert_eq!(game.scores(), (1, 0));
        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));
        assert_eq!(game.ball().velocity(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_ball_past_left_edge_scores_right() {
        let mut game = playing_game();
        place_ball(&mut game, Vec2::new(-1.0, 300.0), Vec2::new(-900.0, 40.0));

        game.update(&KeyboardState::new(), 0.0, SCREEN);

        assert_eq!(game.scores(), (0, 1));
        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));
        assert_eq!(game.ball().velocity(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_scoring_happens_even_in_menu() {
        let mut game = new_game();
        place_ball(&mut game, Vec2::new(2000.0, 300.0), Vec2::new(900.0, 0.0));

        game.update(&KeyboardState::new(), FRAME, SCREEN);

        assert_eq!(game.scores(), (1, 0));
    }

    #[test]
    fn test_paddles_keep_position_after_score() {
        let mut game = playing_game();
        let keys = press(KeyCode::KeyW);
        game.update(&keys, 0.1, SCREEN);
        let left_y = game.left_paddle.position().y;
        assert!(left_y < 415.0);

        place_ball(&mut game, Vec2::new(-1.0, 300.0), Vec2::new(-900.0, 0.0));
        game.update(&KeyboardState::new(), 0.0, SCREEN);

        assert_eq!(game.scores(), (0, 1));
        assert_eq!(game.left_paddle.position().y, left_y);
    }

    #[test]
    fn test_menu_freezes_entities() {
        let mut game = new_game();
        let keys = press(KeyCode::ArrowDown);

        game.update(&keys, 0.5, SCREEN);

        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));
        assert_eq!(game.right_paddle.position().y, 415.0);
    }

    #[test]
    fn test_playing_moves_ball_and_paddles() {
        let mut game = playing_game();
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::ArrowUp);

        game.update(&keys, 0.1, SCREEN);

        assert_relative_eq!(game.ball().position().x, 1010.0);
        assert_relative_eq!(game.ball().position().y, 590.0);
        assert_relative_eq!(game.left_paddle.position().y, 515.0);
        assert_relative_eq!(game.right_paddle.position().y, 315.0);
    }

    #[test]
    fn test_toggle_key_flips_state() {
        let mut game = new_game();
        let mut keys = press(KeyCode::Space);

        game.update(&keys, FRAME, SCREEN);
        assert_eq!(game.state(), GameState::Playing);

        // Holding the key does not toggle again
        keys.end_frame();
        game.update(&keys, FRAME, SCREEN);
        assert_eq!(game.state(), GameState::Playing);

        keys.release(KeyCode::Space);
        keys.press(KeyCode::Space);
        game.update(&keys, FRAME, SCREEN);
        assert_eq!(game.state(), GameState::Menu);
    }

    #[test]
    fn test_restart_in_menu_clears_scores() {
        let mut game = new_game();
        game.score_left = 3;
        game.score_right = 7;
        place_ball(&mut game, Vec2::new(300.0, 200.0), Vec2::new(-900.0, 10.0));

        game.update(&press(KeyCode::KeyR), FRAME, SCREEN);

        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));
        assert_eq!(game.ball().velocity(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = playing_game();
        game.score_left = 2;

        game.update(&press(KeyCode::KeyR), FRAME, SCREEN);

        assert_eq!(game.scores(), (2, 0));
    }

    #[test]
    fn test_restart_then_toggle_from_fresh_game() {
        let mut game = new_game();

        game.update(&press(KeyCode::KeyR), FRAME, SCREEN);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.ball().position(), Vec2::new(960.0, 540.0));

        game.update(&press(KeyCode::Space), FRAME, SCREEN);
        assert_eq!(game.state(), GameState::Playing);

        game.update(&KeyboardState::new(), FRAME, SCREEN);
        assert!(game.ball().position().x > 960.0);
    }

    #[test]
    fn test_draw_menu() {
        let game = new_game();
        let mut canvas = RecordingCanvas::default();
        game.draw(&mut canvas, SCREEN);

        assert_eq!(canvas.calls[0], DrawCall::Clear(Color::BLACK));
        assert_eq!(
            canvas.texts(),
            vec!["Press Space to continue", "Press R to restart"]
        );
        assert!(!canvas
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::Circle { .. } | DrawCall::Rect(_))));
    }

    #[test]
    fn test_draw_playing() {
        let mut game = playing_game();
        game.score_left = 4;
        game.score_right = 2;
        place_ball(&mut game, Vec2::new(960.0, 540.0), Vec2::new(-550.0, 0.0));

        let mut canvas = RecordingCanvas::default();
        game.draw(&mut canvas, SCREEN);

        assert_eq!(canvas.texts(), vec!["4 : 2", "-550.00"]);
        assert!(canvas.calls.contains(&DrawCall::Circle {
            center: Vec2::new(960.0, 540.0),
            radius: 10.0,
        }));
        assert!(canvas.calls.contains(&DrawCall::Rect(game.left_paddle.rect())));
        assert!(canvas.calls.contains(&DrawCall::Rect(game.right_paddle.rect())));
    }
}
