use egui::{pos2, vec2, Pos2, Vec2};

use crate::sim::color::{self, Rgba8};
use crate::sim::Simulation;

pub const SUBTITLE: &str = "Built with Cargo";
pub const EXIT_HINT: &str = "Press ESC to exit";

const WIRE_THICKNESS: f32 = 4.0;

/// A single 2D drawing primitive, in screen units with the origin at the top left.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba8),
    Text {
        text: String,
        position: Pos2,
        size: f32,
        color: Rgba8,
    },
    Line {
        start: Pos2,
        end: Pos2,
        thickness: f32,
        color: Rgba8,
    },
    Rect {
        min: Pos2,
        size: Vec2,
        color: Rgba8,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Rgba8,
    },
}

fn text(text: impl Into<String>, x: f32, y: f32, size: f32, color: Rgba8) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        position: pos2(x, y),
        size,
        color,
    }
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: Rgba8) -> DrawCommand {
    DrawCommand::Rect {
        min: pos2(x, y),
        size: vec2(w, h),
        color,
    }
}

/// Builds the frame's draw list. There is no depth sorting downstream, so the
/// order of this list is the order things land on screen: background, labels,
/// circuit, electron, trail, then the overlays.
pub fn compose(sim: &Simulation, title: &str, fps: u32) -> Vec<DrawCommand> {
    let params = &sim.params;
    let (width, height) = (params.screen_width, params.screen_height);
    let (_, cy) = params.screen_center();
    let electron = &sim.electron;

    let mut commands = vec![
        DrawCommand::Clear(color::RAYWHITE),
        text(format!("{title} Demo"), 10.0, 10.0, 20.0, color::DARKGRAY),
        text(SUBTITLE, 10.0, 35.0, 16.0, color::GRAY),
        DrawCommand::Line {
            start: sim.wire.start,
            end: sim.wire.end,
            thickness: WIRE_THICKNESS,
            color: color::DARKGRAY,
        },
    ];

    // battery
    let bx = 50.0;
    commands.extend([
        rect(bx - 5.0, cy - 20.0, 10.0, 40.0, color::RED),
        rect(bx - 3.0, cy - 15.0, 6.0, 5.0, color::DARKGRAY),
        text("+", bx - 15.0, cy - 30.0, 20.0, color::RED),
        text("-", bx - 15.0, cy + 15.0, 20.0, color::BLUE),
    ]);

    // resistor
    let rx = width - 50.0;
    commands.extend([
        rect(rx - 10.0, cy - 15.0, 20.0, 30.0, color::ORANGE),
        text("R", rx - 5.0, cy - 5.0, 12.0, color::WHITE),
    ]);

    commands.push(DrawCommand::Circle {
        center: electron.position,
        radius: electron.radius,
        color: electron.color,
    });
    commands.push(DrawCommand::Circle {
        center: electron.position,
        radius: electron.highlight_radius(),
        color: color::WHITE.fade(0.5),
    });

    commands.extend(sim.trail().into_iter().map(|ghost| DrawCommand::Circle {
        center: ghost.position,
        radius: ghost.radius,
        color: ghost.color,
    }));

    commands.push(text(format!("FPS: {fps}"), 10.0, height - 30.0, 20.0, color::GREEN));
    commands.push(text(EXIT_HINT, width - 150.0, height - 30.0, 20.0, color::DARKGRAY));

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Params;

    fn frame(elapsed: f32, fps: u32) -> (Simulation, Vec<DrawCommand>) {
        let mut sim = Simulation::new(Params::new());
        sim.advance(elapsed);
        let commands = compose(&sim, "CirAni - Circuit Animation", fps);
        (sim, commands)
    }

    fn kind(command: &DrawCommand) -> &'static str {
        match command {
            DrawCommand::Clear(_) => "clear",
            DrawCommand::Text { .. } => "text",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Circle { .. } => "circle",
        }
    }

    #[test]
    fn draw_order_is_fixed() {
        let (_, commands) = frame(1.2, 60);
        let kinds: Vec<_> = commands.iter().map(kind).collect();
        assert_eq!(
            kinds,
            [
                "clear", "text", "text", "line", // background, title, subtitle, wire
                "rect", "rect", "text", "text", // battery
                "rect", "text", // resistor
                "circle", "circle", // electron and highlight
                "circle", "circle", "circle", "circle", "circle", // trail
                "text", "text", // fps, exit hint
            ]
        );
    }

    #[test]
    fn background_is_cleared_first() {
        let (_, commands) = frame(0.0, 0);
        assert_eq!(commands[0], DrawCommand::Clear(color::RAYWHITE));
    }

    #[test]
    fn labels_carry_expected_text() {
        let (_, commands) = frame(0.0, 59);
        let texts: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            [
                "CirAni - Circuit Animation Demo",
                SUBTITLE,
                "+",
                "-",
                "R",
                "FPS: 59",
                EXIT_HINT,
            ]
        );
    }

    #[test]
    fn wire_is_a_thick_line_between_endpoints() {
        let (sim, commands) = frame(0.4, 60);
        assert_eq!(
            commands[3],
            DrawCommand::Line {
                start: sim.wire.start,
                end: sim.wire.end,
                thickness: 4.0,
                color: color::DARKGRAY,
            }
        );
    }

    #[test]
    fn electron_then_highlight_then_trail() {
        let (sim, commands) = frame(0.9, 60);
        assert_eq!(
            commands[10],
            DrawCommand::Circle {
                center: sim.electron.position,
                radius: 10.0,
                color: sim.electron.color,
            }
        );
        assert_eq!(
            commands[11],
            DrawCommand::Circle {
                center: sim.electron.position,
                radius: 8.0,
                color: Rgba8::new(255, 255, 255, 127),
            }
        );
        for (command, ghost) in commands[12..17].iter().zip(sim.trail()) {
            assert_eq!(
                *command,
                DrawCommand::Circle {
                    center: ghost.position,
                    radius: 5.0,
                    color: ghost.color,
                }
            );
        }
    }

    #[test]
    fn circuit_glyphs_flank_the_wire() {
        let (_, commands) = frame(0.0, 60);
        assert_eq!(commands[4], rect(45.0, 280.0, 10.0, 40.0, color::RED));
        assert_eq!(commands[8], rect(740.0, 285.0, 20.0, 30.0, color::ORANGE));
    }
}
