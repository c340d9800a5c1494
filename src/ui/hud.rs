//! Heads-up display
//!
//! [`build_hud`] turns game progress into positioned text lines;
//! [`draw_hud`] paints them with imgui in a borderless, transparent,
//! input-less window covering the whole display.

use imgui::{Condition, StyleVar, WindowFlags};

use crate::game::progress::GameProgress;

/// Pixel height of the HUD font at scale 1.0
pub const BASE_FONT_PIXELS: f32 = 48.0;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const GREEN: [f32; 4] = [0.3, 1.0, 0.3, 1.0];
pub const GOLD: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
pub const RED: [f32; 4] = [1.0, 0.2, 0.2, 1.0];

pub const FIND_PORTAL_TEXT: &str = "Find the portal!";
pub const WIN_TEXT: &str = "THE END";

/// One line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Top-left corner in pixels, origin at the top-left of the display
    pub position: [f32; 2],
    pub scale: f32,
    pub color: [f32; 4],
}

impl HudLine {
    /// Places a line by its baseline measured from the bottom of the display
    fn from_baseline(
        text: impl Into<String>,
        x: f32,
        baseline_from_bottom: f32,
        scale: f32,
        color: [f32; 4],
        display_height: f32,
    ) -> Self {
        Self {
            text: text.into(),
            position: [
                x.max(0.0),
                (display_height - baseline_from_bottom - BASE_FONT_PIXELS * scale).max(0.0),
            ],
            scale,
            color,
        }
    }
}

pub fn progress_text(progress: &GameProgress) -> String {
    format!(
        "Chests opened: {}/{}",
        progress.chests_opened, progress.chests_to_win
    )
}

/// HUD lines for the current frame.
///
/// The progress counter is always shown. While the portal is active and the
/// game not yet won, the portal prompt blinks: visible during the second half
/// of every second of `elapsed`. A won game shows the end banner, otherwise a
/// pending warning message is shown.
pub fn build_hud(progress: &GameProgress, elapsed: f32, display_size: [f32; 2]) -> Vec<HudLine> {
    let [width, height] = display_size;
    let mut lines = vec![HudLine::from_baseline(
        progress_text(progress),
        25.0,
        25.0,
        0.5,
        WHITE,
        height,
    )];

    if progress.portal_active && !progress.game_won && elapsed.rem_euclid(1.0) > 0.5 {
        lines.push(HudLine::from_baseline(
            FIND_PORTAL_TEXT,
            width / 2.0 - 200.0,
            height - 50.0,
            0.7,
            GREEN,
            height,
        ));
    }

    if progress.game_won {
        lines.push(HudLine::from_baseline(
            WIN_TEXT,
            width / 2.0 - 70.0,
            height / 2.0,
            2.0,
            GOLD,
            height,
        ));
    } else if let Some(message) = progress.message() {
        lines.push(HudLine::from_baseline(
            message.text.clone(),
            width / 2.0 - 300.0,
            height / 2.0,
            0.7,
            RED,
            height,
        ));
    }

    lines
}

/// Draws `lines` over the whole display
pub fn draw_hud(ui: &imgui::Ui, lines: &[HudLine]) {
    let display_size = ui.io().display_size;
    let _padding = ui.push_style_var(StyleVar::WindowPadding([0.0, 0.0]));
    let _border = ui.push_style_var(StyleVar::WindowBorderSize(0.0));

    ui.window("hud")
        .position([0.0, 0.0], Condition::Always)
        .size(display_size, Condition::Always)
        .flags(
            WindowFlags::NO_DECORATION
                | WindowFlags::NO_BACKGROUND
                | WindowFlags::NO_INPUTS
                | WindowFlags::NO_SAVED_SETTINGS
                | WindowFlags::NO_FOCUS_ON_APPEARING
                | WindowFlags::NO_NAV,
        )
        .build(|| {
            for line in lines {
                ui.set_window_font_scale(line.scale);
                ui.set_cursor_pos(line.position);
                ui.text_colored(line.color, &line.text);
            }
            ui.set_window_font_scale(1.0);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: [f32; 2] = [1280.0, 720.0];

    fn texts(lines: &[HudLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_counter_always_shown() {
        let progress = GameProgress::new(3);
        let lines = build_hud(&progress, 0.0, DISPLAY);

        assert_eq!(texts(&lines), vec!["Chests opened: 0/3"]);
        assert_eq!(lines[0].position, [25.0, 720.0 - 25.0 - 24.0]);
        assert_eq!(lines[0].color, WHITE);
    }

    #[test]
    fn test_portal_prompt_blinks() {
        let mut progress = GameProgress::new(1);
        progress.record_chest_opened();

        let hidden = build_hud(&progress, 10.25, DISPLAY);
        let shown = build_hud(&progress, 10.75, DISPLAY);

        assert!(!texts(&hidden).contains(&FIND_PORTAL_TEXT));
        assert_eq!(texts(&shown), vec!["Chests opened: 1/1", FIND_PORTAL_TEXT]);
        assert_eq!(shown[1].color, GREEN);
    }

    #[test]
    fn test_win_banner_replaces_prompt_and_message() {
        let mut progress = GameProgress::new(1);
        progress.record_chest_opened();
        progress.post_message("stale", 3.0);
        progress.game_won = true;

        let lines = build_hud(&progress, 0.75, DISPLAY);
        assert_eq!(texts(&lines), vec!["Chests opened: 1/1", WIN_TEXT]);
        assert_eq!(lines[1].scale, 2.0);
        assert_eq!(lines[1].color, GOLD);
    }

    #[test]
    fn test_message_shown_while_timer_positive() {
        let mut progress = GameProgress::new(3);
        progress.post_message("2 more chests needed to open the portal!", 3.0);

        let lines = build_hud(&progress, 0.0, DISPLAY);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].color, RED);

        progress.tick(3.5);
        assert_eq!(build_hud(&progress, 0.0, DISPLAY).len(), 1);
    }
}
