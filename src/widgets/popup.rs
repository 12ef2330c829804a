use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16, bounds: Rect) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_add(anchor.height);
    let space_below = bounds.bottom().saturating_sub(popup_y);
    let space_right = bounds.right().saturating_sub(popup_x);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width
            .min(anchor.width.saturating_sub(x_offset * 2))
            .min(space_right),
        height: height.min(space_below),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
