use eframe::egui;
use library::model::Category;

use crate::config::{AppConfig, ThemeType};

/// Brand accent used for selection ghosts, today highlights and deep-work
/// blocks.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x51, 0x00, 0xfd);

/// Current-time line color.
pub const NOW_LINE: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

pub fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
    match config.theme.theme_type {
        ThemeType::Dark => ctx.set_visuals(egui::Visuals::dark()),
        ThemeType::Light => ctx.set_visuals(egui::Visuals::light()),
        ThemeType::Mocha => {
            let colors = catppuccin::PALETTE.mocha.colors;
            let c = |c: catppuccin::Color| egui::Color32::from_rgb(c.rgb.r, c.rgb.g, c.rgb.b);

            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = c(colors.base);
            visuals.window_fill = c(colors.mantle);
            visuals.faint_bg_color = c(colors.surface0);
            visuals.extreme_bg_color = c(colors.crust);
            visuals.widgets.noninteractive.bg_fill = c(colors.surface0);
            visuals.widgets.noninteractive.fg_stroke.color = c(colors.text);
            visuals.widgets.noninteractive.bg_stroke.color = c(colors.surface1);
            visuals.widgets.inactive.bg_fill = c(colors.surface0);
            visuals.widgets.inactive.fg_stroke.color = c(colors.text);
            visuals.widgets.hovered.bg_fill = c(colors.surface2);
            visuals.widgets.hovered.fg_stroke.color = c(colors.text);
            visuals.widgets.active.bg_fill = c(colors.surface1);
            visuals.widgets.active.fg_stroke.color = c(colors.text);
            visuals.selection.bg_fill = c(colors.mauve);
            visuals.warn_fg_color = c(colors.yellow);
            visuals.error_fg_color = c(colors.red);
            ctx.set_visuals(visuals);
        }
    }
}

/// Border/accent color of a block by category.
pub fn category_border(category: Category) -> egui::Color32 {
    match category {
        Category::DeepWork => ACCENT,
        Category::Meeting => egui::Color32::from_rgb(16, 185, 129),
        Category::Admin => egui::Color32::from_rgb(249, 115, 22),
        Category::Break => egui::Color32::from_rgb(113, 113, 122),
    }
}

/// Translucent body fill of a block by category.
pub fn category_fill(category: Category) -> egui::Color32 {
    category_border(category).gamma_multiply(0.25)
}
