//! Shape descriptors for 2D primitives
//!
//! Turns a `RenderSnapshot` into a flat list of primitives. The drawing
//! backend only has to know how to fill a rotated square, fill or stroke a
//! circle and place a line of text.

use glam::Vec2;
use serde::Serialize;

use super::RenderSnapshot;
use crate::sim::GamePhase;

/// Colors for game elements (RGBA)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Font sizes
pub const TITLE_FONT: f32 = 36.0;
pub const BODY_FONT: f32 = 20.0;

/// Horizontal anchoring of a text item at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Position is the left end of the baseline
    Left,
    /// Position is the middle of the baseline
    Center,
}

/// A drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Fill the whole frame
    Clear { color: [f32; 4] },
    /// Filled square rotated by `rotation` radians about its center
    Square {
        center: Vec2,
        size: f32,
        rotation: f32,
        color: [f32; 4],
    },
    /// Filled circle
    Disc {
        center: Vec2,
        diameter: f32,
        color: [f32; 4],
    },
    /// Circle outline
    Circle {
        center: Vec2,
        diameter: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        font_size: f32,
        align: TextAlign,
        color: [f32; 4],
    },
}

fn text(text: String, pos: Vec2, font_size: f32, align: TextAlign) -> Shape {
    Shape::Text {
        text,
        pos,
        font_size,
        align,
        color: colors::TEXT,
    }
}

/// Build the primitives for one frame
pub fn build_frame(snapshot: &RenderSnapshot) -> Vec<Shape> {
    let mut shapes = vec![Shape::Clear {
        color: colors::BACKGROUND,
    }];

    match snapshot.phase {
        GamePhase::Start => start_screen(snapshot, &mut shapes),
        GamePhase::Playing => {
            playfield(snapshot, &mut shapes);
            hud(snapshot, &mut shapes);
        }
        GamePhase::GameOver => game_over_screen(snapshot, &mut shapes),
    }

    shapes
}

fn start_screen(snapshot: &RenderSnapshot, shapes: &mut Vec<Shape>) {
    let center = snapshot.bounds.center();
    shapes.push(text(
        "Asteroids Game".to_string(),
        center - Vec2::new(0.0, 60.0),
        TITLE_FONT,
        TextAlign::Center,
    ));
    shapes.push(text(
        "Press start to play".to_string(),
        center,
        BODY_FONT,
        TextAlign::Center,
    ));
}

fn playfield(snapshot: &RenderSnapshot, shapes: &mut Vec<Shape>) {
    if let Some(ship) = &snapshot.ship {
        shapes.push(Shape::Square {
            center: ship.pos,
            size: ship.size,
            rotation: ship.heading,
            color: colors::SHIP,
        });
    }

    for &pos in &snapshot.bullets {
        shapes.push(Shape::Disc {
            center: pos,
            diameter: snapshot.bullet_size,
            color: colors::BULLET,
        });
    }

    for asteroid in &snapshot.asteroids {
        shapes.push(Shape::Circle {
            center: asteroid.pos,
            diameter: asteroid.size,
            color: colors::ASTEROID,
        });
    }
}

fn hud(snapshot: &RenderSnapshot, shapes: &mut Vec<Shape>) {
    shapes.push(text(
        format!("Score: {}", snapshot.score),
        Vec2::new(20.0, 30.0),
        BODY_FONT,
        TextAlign::Left,
    ));
    shapes.push(text(
        format!("Lives: {}", snapshot.lives),
        Vec2::new(snapshot.bounds.width - 120.0, 30.0),
        BODY_FONT,
        TextAlign::Left,
    ));
}

fn game_over_screen(snapshot: &RenderSnapshot, shapes: &mut Vec<Shape>) {
    let center = snapshot.bounds.center();
    let final_score = snapshot.final_score.unwrap_or(snapshot.score);

    shapes.push(text(
        "GAME OVER".to_string(),
        center - Vec2::new(0.0, 50.0),
        TITLE_FONT,
        TextAlign::Center,
    ));
    shapes.push(text(
        format!("Final Score: {}", final_score),
        center + Vec2::new(0.0, 50.0),
        TITLE_FONT,
        TextAlign::Center,
    ));
    if let Some(best) = snapshot.best_score {
        shapes.push(text(
            format!("Best: {}", best),
            center + Vec2::new(0.0, 100.0),
            BODY_FONT,
            TextAlign::Center,
        ));
    }
}
