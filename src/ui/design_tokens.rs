// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! Colors, opacity levels, the spacing scale and component sizes live here so
//! the level indicator and the settings dialog stay visually consistent.
//!
//! ```
//! use fullscreen_brightness::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let indicator_box = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(indicator_box.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Notice banner.
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod opacity {
    pub const OPAQUE: f32 = 1.0;
    /// Background of the level indicator box.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Settings dialog panel over the media.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing scale on a 4px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOOLBAR_HEIGHT: f32 = 48.0;

    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const PICK_LIST_WIDTH: f32 = 150.0;

    /// Distance between the level indicator and the media's top-left corner.
    pub const INDICATOR_OFFSET: f32 = 20.0;
    pub const INDICATOR_ICON: f32 = 40.0;
    pub const INDICATOR_ICON_MARGIN: f32 = 15.0;
    pub const INDICATOR_HEIGHT: f32 = 70.0;
    pub const INDICATOR_LABEL_WIDTH: f32 = 80.0;
    pub const INDICATOR_LABEL_MARGIN: f32 = 20.0;
}

pub mod typography {
    /// Percentage shown in the level indicator.
    pub const DISPLAY: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const INDICATOR: f32 = 10.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < opacity::OPAQUE);
    assert!(sizing::INDICATOR_HEIGHT >= sizing::INDICATOR_ICON);
    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_icon_fills_the_box_height() {
        let icon_box = sizing::INDICATOR_ICON + 2.0 * sizing::INDICATOR_ICON_MARGIN;
        assert_eq!(icon_box, sizing::INDICATOR_HEIGHT);
    }

    #[test]
    fn indicator_fits_in_the_dialog_width() {
        let width = sizing::INDICATOR_ICON
            + 2.0 * sizing::INDICATOR_ICON_MARGIN
            + sizing::INDICATOR_LABEL_WIDTH
            + sizing::INDICATOR_LABEL_MARGIN;
        assert!(width < sizing::DIALOG_WIDTH);
    }
}
