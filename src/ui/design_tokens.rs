// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every snack.

## Organization

- **Palette**: Base and variant colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snack::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A translucent snack background
let background = Color {
    a: opacity::SURFACE,
    ..palette::GRAY_900
};

// Use the spacing scale
let gutter = spacing::MD; // 16px
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
    pub const GRAY_900: Color = Color::from_rgb(0.196, 0.196, 0.196);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Variant colors
    pub const ERROR_500: Color = Color::from_rgb(0.827, 0.184, 0.184);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.627, 0.278);
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Snack surface while resting
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    /// Resting height of one snack, used to stack them.
    pub const SNACK_HEIGHT: f32 = 48.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Medium title - Demo window heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Snack message
    pub const BODY: f32 = 14.0;

    /// Small body - Action labels
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
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
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::SNACK_HEIGHT > sizing::ICON_MD);
    assert!(sizing::TOAST_WIDTH > sizing::SNACK_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    // Radius validation
    assert!(radius::MD > radius::SM);
};
