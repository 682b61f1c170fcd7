use crate::app::state::{Effect, EffectKind};
use crate::host::Capabilities;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

// Particle tints under true color, matching the sidebar gradient family
const RGB_TINTS: [(u8, u8, u8); 6] = [
    (230, 110, 110),
    (230, 180, 80),
    (90, 210, 130),
    (80, 200, 210),
    (175, 140, 220),
    (220, 150, 180),
];

pub fn render(frame: &mut Frame, area: Rect, effect: &Effect, caps: &Capabilities) {
    let symbol = match effect.kind {
        EffectKind::Snow => caps.glyph("❄", "*"),
        EffectKind::Balloons => caps.glyph("●", "o"),
    };

    for p in &effect.particles {
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let x = area.x + p.x as u16;
        let y = area.y + p.y as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }

        let color = match effect.kind {
            EffectKind::Snow => Color::White,
            EffectKind::Balloons => {
                if caps.true_color {
                    let (r, g, b) = RGB_TINTS[p.tint as usize % RGB_TINTS.len()];
                    Color::Rgb(r, g, b)
                } else {
                    Theme::particle_color(p.tint)
                }
            }
        };

        frame.render_widget(
            Paragraph::new(Span::styled(symbol, Style::default().fg(color))),
            Rect::new(x, y, 1, 1),
        );
    }
}
