use crate::atom::{Atom, ELECTRON_RADIUS};
use druid::kurbo::Circle;
use druid::piet::{Text, TextLayout, TextLayoutBuilder};
use druid::text::FontFamily;
use druid::{Color, PaintCtx, RenderContext};

/// Canvas background, painted over the whole window each frame
pub const BACKGROUND: Color = Color::WHITE;

const ORBIT_COLOR: Color = Color::GRAY;
const NUCLEUS_COLOR: Color = Color::rgb8(255, 215, 0); // gold
const ELECTRON_COLOR: Color = Color::BLUE;
const OUTLINE_COLOR: Color = Color::BLACK;
const OUTLINE_WIDTH: f64 = 1.0;
const LABEL_SIZE: f64 = 16.0;

/// Draws one unfilled guide circle per orbit radius, centered on the
/// nucleus. Reads the atom only; nothing is mutated.
pub fn draw_orbits(ctx: &mut PaintCtx, atom: &Atom) {
    for &radius in &atom.orbits {
        let orbit = Circle::new(atom.nucleus.center, radius);
        ctx.stroke(orbit, &ORBIT_COLOR, OUTLINE_WIDTH);
    }
}

/// Draws the nucleus as a filled, outlined disc with the element
/// symbol centered on it.
pub fn draw_nucleus(ctx: &mut PaintCtx, atom: &Atom) {
    let disc = Circle::new(atom.nucleus.center, atom.nucleus.radius);
    ctx.fill(disc, &NUCLEUS_COLOR);
    ctx.stroke(disc, &OUTLINE_COLOR, OUTLINE_WIDTH);

    let layout = ctx
        .text()
        .new_text_layout(atom.nucleus.label)
        .font(FontFamily::SYSTEM_UI, LABEL_SIZE)
        .text_color(OUTLINE_COLOR)
        .build()
        .unwrap();
    let text_size = layout.size();
    let pos = (
        atom.nucleus.center.x - text_size.width / 2.0,
        atom.nucleus.center.y - text_size.height / 2.0,
    );
    ctx.draw_text(&layout, pos);
}

/// Draws each electron as a small filled, outlined dot at its current
/// polar position on its orbit.
pub fn draw_electrons(ctx: &mut PaintCtx, atom: &Atom) {
    for electron in &atom.electrons {
        let dot = Circle::new(atom.electron_position(electron), ELECTRON_RADIUS);
        ctx.fill(dot, &ELECTRON_COLOR);
        ctx.stroke(dot, &OUTLINE_COLOR, OUTLINE_WIDTH);
    }
}
