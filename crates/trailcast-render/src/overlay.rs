//! Anchored placement of overlay images onto the frame canvas.

use trailcast_core::{Canvas, Position};

/// Composite `image` onto `target` at one of the nine anchor positions.
///
/// `Hidden` is a documented short-circuit: the target is left untouched.
/// Top/Left anchors sit exactly `margin` pixels from their edge, Bottom/Right
/// anchors `margin` pixels from the opposite edge minus the image dimension,
/// and Center rows/columns are centered by floored halving (margin does not
/// apply). The image is blitted alpha-aware at its own size; no scaling.
pub fn render_image(image: &Canvas, position: Position, margin: i32, target: &mut Canvas) {
    let image_width = image.width as i32;
    let image_height = image.height as i32;
    let target_width = target.width as i32;
    let target_height = target.height as i32;

    let (x, y) = match position {
        Position::Hidden => return,
        Position::TopLeft => (margin, margin),
        Position::TopCenter => ((target_width - image_width) / 2, margin),
        Position::TopRight => (target_width - image_width - margin, margin),
        Position::CenterLeft => (margin, (target_height - image_height) / 2),
        Position::Center => (
            (target_width - image_width) / 2,
            (target_height - image_height) / 2,
        ),
        Position::CenterRight => (
            target_width - image_width - margin,
            (target_height - image_height) / 2,
        ),
        Position::BottomLeft => (margin, target_height - image_height - margin),
        Position::BottomCenter => (
            (target_width - image_width) / 2,
            target_height - image_height - margin,
        ),
        Position::BottomRight => (
            target_width - image_width - margin,
            target_height - image_height - margin,
        ),
    };

    target.composite_over(image, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailcast_core::Color;

    const TARGET_W: i32 = 100;
    const TARGET_H: i32 = 80;
    const IMAGE_W: i32 = 20;
    const IMAGE_H: i32 = 20;
    const MARGIN: i32 = 10;

    fn expected_top_left(position: Position) -> (i32, i32) {
        match position {
            Position::TopLeft => (MARGIN, MARGIN),
            Position::TopCenter => ((TARGET_W - IMAGE_W) / 2, MARGIN),
            Position::TopRight => (TARGET_W - IMAGE_W - MARGIN, MARGIN),
            Position::CenterLeft => (MARGIN, (TARGET_H - IMAGE_H) / 2),
            Position::Center => ((TARGET_W - IMAGE_W) / 2, (TARGET_H - IMAGE_H) / 2),
            Position::CenterRight => (TARGET_W - IMAGE_W - MARGIN, (TARGET_H - IMAGE_H) / 2),
            Position::BottomLeft => (MARGIN, TARGET_H - IMAGE_H - MARGIN),
            Position::BottomCenter => ((TARGET_W - IMAGE_W) / 2, TARGET_H - IMAGE_H - MARGIN),
            Position::BottomRight => (TARGET_W - IMAGE_W - MARGIN, TARGET_H - IMAGE_H - MARGIN),
            Position::Hidden => unreachable!("hidden has no placement"),
        }
    }

    #[test]
    fn test_all_anchors_place_image_fully_inside() {
        let image = Canvas::solid(IMAGE_W as u32, IMAGE_H as u32, &Color::RED);
        for position in Position::ANCHORS {
            let mut target = Canvas::solid(TARGET_W as u32, TARGET_H as u32, &Color::BLACK);
            render_image(&image, position, MARGIN, &mut target);

            let (x, y) = expected_top_left(position);
            assert!(x >= 0 && y >= 0, "{} placed out of bounds", position);
            assert!(x + IMAGE_W <= TARGET_W && y + IMAGE_H <= TARGET_H);

            // All four corners of the blit carry the image color.
            for (cx, cy) in [
                (x, y),
                (x + IMAGE_W - 1, y),
                (x, y + IMAGE_H - 1),
                (x + IMAGE_W - 1, y + IMAGE_H - 1),
            ] {
                assert_eq!(
                    target.get_pixel(cx as u32, cy as u32),
                    Some([255, 0, 0, 255]),
                    "{} corner ({}, {})",
                    position,
                    cx,
                    cy
                );
            }
        }
    }

    #[test]
    fn test_hidden_leaves_target_untouched() {
        let image = Canvas::solid(IMAGE_W as u32, IMAGE_H as u32, &Color::RED);
        let mut target = Canvas::solid(TARGET_W as u32, TARGET_H as u32, &Color::BLACK);
        let before = target.clone();
        render_image(&image, Position::Hidden, MARGIN, &mut target);
        assert_eq!(target, before);
    }

    #[test]
    fn test_zero_margin_touches_edges() {
        let image = Canvas::solid(IMAGE_W as u32, IMAGE_H as u32, &Color::RED);
        let mut target = Canvas::solid(TARGET_W as u32, TARGET_H as u32, &Color::BLACK);
        render_image(&image, Position::BottomRight, 0, &mut target);
        assert_eq!(
            target.get_pixel((TARGET_W - 1) as u32, (TARGET_H - 1) as u32),
            Some([255, 0, 0, 255])
        );
    }

    #[test]
    fn test_translucent_overlay_blends() {
        let image = Canvas::solid(2, 2, &Color::RED.with_alpha(0.5));
        let mut target = Canvas::solid(10, 10, &Color::WHITE);
        render_image(&image, Position::TopLeft, 0, &mut target);
        let px = target.get_pixel(0, 0).unwrap();
        assert!(px[0] > 200 && px[1] < 200, "expected a blended pink pixel");
    }
}
