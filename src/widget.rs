use crate::atom::Atom;
use crate::graphics::{draw_electrons, draw_nucleus, draw_orbits, BACKGROUND};
use crate::state::AppState;
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{Text, TextLayout, TextLayoutBuilder},
    Color, RenderContext, Widget,
};
use std::time::{Duration, Instant};

/// Interval between animation frames (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Animated sodium atom widget
pub struct AtomWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl AtomWidget {
    pub fn new() -> Self {
        AtomWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }
}

/// Puts every electron back on its initial angle. Independent of the
/// paused flag.
fn reset_atom(data: &mut AppState) {
    data.atom = Atom::sodium(data.atom.nucleus.center);
}

impl Widget<AppState> for AtomWidget {
    /// Handle events for the atom widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(FRAME_INTERVAL);
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::Timer(_) => {
                if !data.paused {
                    data.atom.update();
                    ctx.request_paint();
                }
                ctx.request_timer(FRAME_INTERVAL);
            }
            Event::KeyDown(key_event) => {
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        "d" | "D" => {
                            data.debug = !data.debug;
                            log::debug!("debug overlay: {}", data.debug);
                            ctx.request_paint();
                        }
                        "p" | "P" => {
                            data.paused = !data.paused;
                            log::debug!("paused: {}", data.paused);
                            ctx.request_paint();
                        }
                        "q" | "Q" => {
                            // Submit the QUIT_APP command to exit the application
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        "r" | "R" => {
                            // Works while paused too; the scene is
                            // redrawn under the pause overlay.
                            reset_atom(data);
                            ctx.request_paint();
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the atom widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Paint one frame: clear, then orbits, nucleus, and electrons in
    /// that order so later draws layer on top of earlier ones.
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        ctx.fill(size.to_rect(), &BACKGROUND);

        draw_orbits(ctx, &data.atom);
        draw_nucleus(ctx, &data.atom);
        draw_electrons(ctx, &data.atom);

        // Add debug info if debug mode is enabled
        if data.debug {
            // Draw program name and version
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw electron count
            let text = format!("Electrons: {}", data.atom.electrons.len());
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw the lead electron's accumulated angle
            let text = format!("Angle: {:.2}", data.atom.electrons[0].angle);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", self.fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 70.0));
        }

        // Display 'Paused' if the animation is paused
        if data.paused {
            // Draw a semi-transparent overlay
            let overlay_color = Color::rgba8(0, 0, 0, 150);
            ctx.fill(size.to_rect(), &overlay_color);

            // Draw 'Paused' text
            let text = "Paused";
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 36.0)
                .default_attribute(druid::piet::FontWeight::BOLD)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            let text_size = text_layout.size();
            let pos = (
                (size.width - text_size.width) / 2.0,
                (size.height - text_size.height) / 2.0,
            );
            ctx.draw_text(&text_layout, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use druid::kurbo::Point;

    #[test]
    fn reset_restores_initial_angles_even_while_paused() {
        let center = Point::new(200.0, 200.0);
        let mut data = AppState {
            atom: Atom::sodium(center),
            debug: false,
            paused: false,
        };
        for _ in 0..25 {
            data.atom.update();
        }
        data.paused = true;

        reset_atom(&mut data);

        assert_eq!(data.atom, Atom::sodium(center));
        assert!(data.paused, "reset must not unpause");
    }
}
