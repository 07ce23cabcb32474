use crate::{Error, Result};
use palette::{Srgb, Srgba};
use std::str::FromStr;

/// A parsed CSS color, split into an opaque RGB part and an alpha for SVG attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    color: Srgba,
}

impl Paint {
    /// Accepts anything SVG accepts as a color: `#rgb`, `#rrggbb`, `rgb()`, `rgba()`, names.
    pub fn parse(text: &str) -> Result<Self> {
        let c = svgtypes::Color::from_str(text.trim()).map_err(|_| Error::InvalidColor {
            value: text.to_string(),
        })?;
        Ok(Self {
            color: Srgba::new(
                c.red as f32 / 255.0,
                c.green as f32 / 255.0,
                c.blue as f32 / 255.0,
                c.alpha as f32 / 255.0,
            ),
        })
    }

    pub fn srgba(&self) -> Srgba {
        self.color
    }

    pub fn alpha(&self) -> f64 {
        f64::from(self.color.alpha)
    }

    pub fn is_opaque(&self) -> bool {
        self.color.alpha >= 1.0
    }

    /// `#rrggbb`, alpha dropped.
    pub fn hex(&self) -> String {
        let rgb: Srgb<u8> = self.color.color.into_format();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}
