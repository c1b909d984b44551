//! Page rendering
//!
//! Rendering is split in two: this module turns a `ChoiceState` into a list
//! of `UiUpdate`s, and `dom` (web only) applies them to the live document.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::choice::{Choice, ChoiceState};
use crate::consts::*;

/// SVG circle to draw in the ball container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallSpec {
    pub width: u32,
    pub height: u32,
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
    /// Fill color, used verbatim
    pub fill: String,
}

impl BallSpec {
    /// Standard 100x100 ball filled with `fill`
    pub fn new(fill: impl Into<String>) -> Self {
        Self {
            width: BALL_SIZE,
            height: BALL_SIZE,
            cx: BALL_CENTER,
            cy: BALL_CENTER,
            r: BALL_RADIUS,
            fill: fill.into(),
        }
    }

    /// Attributes of the outer `<svg>` element
    pub fn svg_attributes(&self) -> [(&'static str, String); 2] {
        [
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
        ]
    }

    /// Attributes of the `<circle>` element
    pub fn circle_attributes(&self) -> [(&'static str, String); 4] {
        [
            ("cx", self.cx.to_string()),
            ("cy", self.cy.to_string()),
            ("r", self.r.to_string()),
            ("fill", self.fill.clone()),
        ]
    }
}

/// One mutation of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Remove all children of the element
    Clear { selector: &'static str },
    /// Append an SVG ball to the element
    AppendBall { selector: &'static str, ball: BallSpec },
    /// Replace the element's text
    SetText { selector: &'static str, text: String },
    /// Replace the element's markup
    SetHtml { selector: &'static str, html: String },
}

impl UiUpdate {
    /// CSS selector of the element this update targets
    pub fn selector(&self) -> &'static str {
        match self {
            UiUpdate::Clear { selector }
            | UiUpdate::AppendBall { selector, .. }
            | UiUpdate::SetText { selector, .. }
            | UiUpdate::SetHtml { selector, .. } => *selector,
        }
    }
}

/// Draw the ball into the ball container (caller clears it first)
pub fn render_ball(ball: BallSpec) -> UiUpdate {
    UiUpdate::AppendBall {
        selector: BALL_SELECTOR,
        ball,
    }
}

/// Update both tallies and the previous-color marker
pub fn render_labels(red_count: i64, blue_count: i64, previous_color: &str) -> Vec<UiUpdate> {
    vec![
        UiUpdate::SetText {
            selector: RED_COUNT_SELECTOR,
            text: red_count.to_string(),
        },
        UiUpdate::SetText {
            selector: BLUE_COUNT_SELECTOR,
            text: blue_count.to_string(),
        },
        UiUpdate::SetHtml {
            selector: PREVIOUS_COLOR_SELECTOR,
            html: previous_color_html(previous_color).to_string(),
        },
    ]
}

/// Marker for the previous color; "-" for anything unrecognized
pub fn previous_color_html(previous_color: &str) -> &'static str {
    match Choice::parse(previous_color) {
        Some(Choice::Red) => r#"<span style="color: red;">Red</span>"#,
        Some(Choice::Blue) => r#"<span style="color: blue;">Blue</span>"#,
        None => "-",
    }
}

/// Full set of updates for one page load
pub fn plan_page(state: &ChoiceState) -> Vec<UiUpdate> {
    let mut updates = Vec::with_capacity(5);
    updates.push(UiUpdate::Clear {
        selector: BALL_SELECTOR,
    });
    updates.push(render_ball(BallSpec::new(state.color.as_str())));
    updates.extend(render_labels(
        state.red_count,
        state.blue_count,
        &state.previous_color,
    ));
    updates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_blue_previous() {
        let updates = render_labels(3, 5, "blue");
        assert_eq!(
            updates[0],
            UiUpdate::SetText {
                selector: "#redCount",
                text: "3".into()
            }
        );
        assert_eq!(
            updates[1],
            UiUpdate::SetText {
                selector: "#blueCount",
                text: "5".into()
            }
        );
        match &updates[2] {
            UiUpdate::SetHtml { selector, html } => {
                assert_eq!(*selector, "#previousColor");
                assert!(html.contains("color: blue"));
                assert!(html.contains(">Blue<"));
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[test]
    fn test_labels_no_previous() {
        let updates = render_labels(0, 0, "");
        assert_eq!(
            updates[2],
            UiUpdate::SetHtml {
                selector: "#previousColor",
                html: "-".into()
            }
        );
    }

    #[test]
    fn test_previous_marker() {
        assert_eq!(
            previous_color_html("red"),
            r#"<span style="color: red;">Red</span>"#
        );
        assert_eq!(previous_color_html("green"), "-");
        assert_eq!(previous_color_html("Blue"), "-");
    }

    #[test]
    fn test_ball_attributes() {
        let ball = BallSpec::new("blue");
        assert_eq!(
            ball.svg_attributes(),
            [("width", "100".to_string()), ("height", "100".to_string())]
        );
        let circle = ball.circle_attributes();
        assert_eq!(circle[0], ("cx", "50".to_string()));
        assert_eq!(circle[2], ("r", "50".to_string()));
        assert_eq!(circle[3], ("fill", "blue".to_string()));
    }

    #[test]
    fn test_plan_page_order() {
        let state = ChoiceState {
            red_count: 2,
            blue_count: 0,
            previous_color: "red".into(),
            color: "red".into(),
        };
        let updates = plan_page(&state);
        let selectors: Vec<&str> = updates.iter().map(UiUpdate::selector).collect();
        assert_eq!(
            selectors,
            vec!["#ball", "#ball", "#redCount", "#blueCount", "#previousColor"]
        );
        assert_eq!(updates[0], UiUpdate::Clear { selector: "#ball" });
        assert_eq!(updates[1], render_ball(BallSpec::new("red")));
    }

    #[test]
    fn test_corrupted_color_still_fills_ball() {
        let state = ChoiceState {
            red_count: 0,
            blue_count: 1,
            previous_color: "green".into(),
            color: "green".into(),
        };
        let updates = plan_page(&state);
        assert_eq!(updates[1], render_ball(BallSpec::new("green")));
        assert_eq!(
            updates[4],
            UiUpdate::SetHtml {
                selector: "#previousColor",
                html: "-".into()
            }
        );
    }
}
