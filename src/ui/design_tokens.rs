// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use astro_lens::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.58);

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.58, 0.95); // Light indigo
    pub const PRIMARY_500: Color = Color::from_rgb(0.42, 0.45, 0.88); // Primary indigo
    pub const PRIMARY_600: Color = Color::from_rgb(0.32, 0.35, 0.75); // Dark indigo
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dim backdrop behind loading overlays
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Surface background, semi-transparent panels and toolbars
    pub const SURFACE: f32 = 0.95;

    /// Faint backdrop strokes (spinner track)
    pub const BACKDROP: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_XL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - welcome heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - app name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - panel headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - most UI text, captions
    pub const BODY: f32 = 14.0;

    /// Small body - tooltips, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

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

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
